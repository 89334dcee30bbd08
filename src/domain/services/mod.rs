//! Domain Services
//!
//! Pure domain logic with no I/O:
//! - `LinkGraph` / `DeploymentPlan` - dependency ordering
//! - `linker` - placeholder resolution against the ledger

mod link_graph;
pub mod linker;

pub use link_graph::{DeploymentPlan, LinkGraph};
pub use linker::link_for_deploy;
