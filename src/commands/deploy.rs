use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use stevedore::application::{DeployOptions, DeployUseCase};
use stevedore::domain::entities::NetworkId;
use stevedore::domain::ports::DeployEventSink;
use stevedore::infrastructure::{
    DevChainClient, JsonArtifactRepository, RunLock, TomlLedgerRepository,
};

use crate::ui::{glyphs, HumanEventSink, JsonEventSink};

pub fn run(
    manifest: PathBuf,
    network: u64,
    ledger: Option<PathBuf>,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<i32> {
    let network = NetworkId::new(network);
    let mut options = DeployOptions::new(manifest)
        .with_network(network)
        .with_dry_run(dry_run);
    if let Some(path) = ledger {
        options = options.with_ledger_path(path);
    }

    // Dry runs touch neither the chain nor the ledger, so they may run
    // alongside a live deployment.
    let _lock = if dry_run {
        None
    } else {
        Some(RunLock::acquire(&options.ledger_path, network)?)
    };

    let use_case = DeployUseCase::new(
        JsonArtifactRepository::new(),
        TomlLedgerRepository::new(),
        DevChainClient::new(network),
    );

    let sink: Arc<dyn DeployEventSink> = if json {
        Arc::new(JsonEventSink)
    } else {
        Arc::new(HumanEventSink::new(glyphs::supports_unicode()))
    };
    let result = use_case.execute_with_events(&options, sink);

    if !json {
        if dry_run && !result.pending.is_empty() {
            println!("Would deploy, in order:");
            for name in &result.pending {
                println!("  {name}");
            }
        }
        if verbose > 0 {
            for (name, address) in &result.skipped {
                println!("  recorded: {name} at {address:#x}");
            }
        }
        if result.is_success() && !dry_run && !result.has_changes() {
            println!("Nothing to deploy; the ledger is already up to date");
        }
    }

    for error in &result.errors {
        eprintln!("error: {error}");
    }

    Ok(if result.is_success() { 0 } else { 1 })
}
