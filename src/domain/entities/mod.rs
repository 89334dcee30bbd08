//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `ContractSpec` - A contract loaded from a compiled artifact
//! - `Ledger` - Records confirmed deployments per network
//! - `NetworkId` - Network identity

mod contract;
mod ledger;
mod network;

pub use contract::{Bytecode, ContractSpec, PLACEHOLDER_LEN};
pub use ledger::{bytecode_digest, DeployedEntry, Ledger};
pub use network::NetworkId;
