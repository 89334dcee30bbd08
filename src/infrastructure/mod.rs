//! Infrastructure layer - filesystem and chain adapters for the domain ports.

pub mod chain;
pub mod repositories;
pub mod run_lock;

pub use chain::DevChainClient;
pub use repositories::{JsonArtifactRepository, TomlLedgerRepository};
pub use run_lock::RunLock;
