//! ChainClient port - abstraction over the deployment target network.
//!
//! The orchestrator only needs two operations: submit creation bytecode and
//! await confirmation of the resulting transaction. Connection lifecycle,
//! gas estimation, and signing live behind implementations of this trait.

use alloy_primitives::{Address, Bytes, B256};
use thiserror::Error;

use crate::domain::entities::NetworkId;

/// Result type for chain operations
pub type ChainResult<T> = Result<T, ChainError>;

/// Chain-level failures. These become `Deployment` errors with the
/// contract name attached.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The node refused the transaction outright
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// The creation transaction was mined but reverted
    #[error("transaction {tx} reverted")]
    Reverted { tx: B256 },

    /// Transport-level failure talking to the node
    #[error("transport error: {0}")]
    Transport(String),
}

/// Abstract client for a single network.
pub trait ChainClient {
    /// The network this client is connected to
    fn network(&self) -> NetworkId;

    /// Submit creation bytecode, returning the transaction hash
    fn submit(&self, bytecode: &Bytes) -> ChainResult<B256>;

    /// Await confirmation of a creation transaction, returning the address
    /// of the deployed contract
    fn confirm(&self, tx: B256) -> ChainResult<Address>;
}

impl<T: ChainClient + ?Sized> ChainClient for &T {
    fn network(&self) -> NetworkId {
        (**self).network()
    }

    fn submit(&self, bytecode: &Bytes) -> ChainResult<B256> {
        (**self).submit(bytecode)
    }

    fn confirm(&self, tx: B256) -> ChainResult<Address> {
        (**self).confirm(tx)
    }
}
