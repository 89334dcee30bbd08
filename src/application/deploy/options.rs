//! Deploy Options
//!
//! Configuration types for deployment runs.

use std::path::PathBuf;

use crate::domain::entities::NetworkId;

/// Default ledger file name, created next to the manifest.
pub const DEFAULT_LEDGER_FILE: &str = "stevedore.ledger";

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Path to the deployment manifest
    pub manifest: PathBuf,
    /// Path to the ledger file
    pub ledger_path: PathBuf,
    /// Target network
    pub network: NetworkId,
    /// Plan only - no chain calls, no ledger writes
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        let manifest: PathBuf = manifest.into();
        let ledger_path = manifest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join(DEFAULT_LEDGER_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));

        Self {
            manifest,
            ledger_path,
            network: NetworkId::default(),
            dry_run: false,
        }
    }

    pub fn with_network(mut self, network: NetworkId) -> Self {
        self.network = network;
        self
    }

    pub fn with_ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
