//! Stevedore - dependency-aware deployment of linked contracts
//!
//! Stevedore reads a deployment manifest, builds a link graph from the
//! contracts' library placeholders, computes a dependency-ordered plan,
//! and deploys each contract exactly once per network. Confirmed
//! deployments land in an append-only ledger that makes reruns idempotent
//! and aborted runs resumable.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployResult, DeployUseCase};
pub use domain::entities::{Bytecode, ContractSpec, DeployedEntry, Ledger, NetworkId};
pub use domain::ports::{ArtifactRepository, ChainClient, DeployEventSink, LedgerRepository};
pub use domain::services::{DeploymentPlan, LinkGraph};
pub use error::{StevedoreError, StevedoreResult};
