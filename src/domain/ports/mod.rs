//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_repository;
pub mod chain_client;
pub mod deploy_events;
pub mod ledger_repository;

pub use artifact_repository::ArtifactRepository;
pub use chain_client::{ChainClient, ChainError, ChainResult};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use ledger_repository::{LedgerError, LedgerRepository, LedgerResult};
