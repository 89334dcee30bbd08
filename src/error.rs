//! Error types for Stevedore
//!
//! Uses `thiserror` for library errors. Graph and manifest errors are fatal
//! and abort a run before any chain call is made.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stevedore operations
pub type StevedoreResult<T> = Result<T, StevedoreError>;

/// Main error type for Stevedore operations
#[derive(Error, Debug)]
pub enum StevedoreError {
    /// The link graph contains a cycle
    #[error("dependency cycle detected: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    /// A library reference names a contract that is not in the manifest
    #[error("contract '{from}' references unknown contract '{to}'")]
    UnknownReference { from: String, to: String },

    /// The ledger is missing an address the plan guarantees was deployed earlier
    #[error("no recorded address for library '{library}' needed by '{contract}' on network {network} - the plan and the ledger disagree")]
    MissingLink {
        contract: String,
        library: String,
        network: u64,
    },

    /// A chain-level deployment failure
    #[error("deployment of '{name}' failed: {cause}")]
    Deployment { name: String, cause: String },

    /// Invalid deployment manifest
    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Invalid compiled artifact
    #[error("invalid artifact {path}: {message}")]
    InvalidArtifact { path: PathBuf, message: String },

    /// Bytecode does not decode as hex once all placeholders are resolved
    #[error("bytecode for '{name}' is not valid hex after linking: {message}")]
    MalformedBytecode { name: String, message: String },

    /// Another run already holds the per-network lock
    #[error("another deployment is already running for network {network}")]
    RunLocked { network: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
