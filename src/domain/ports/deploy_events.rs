//! Deploy Event Port
//!
//! Provides an observable interface for deployment runs. Enables progress
//! reporting, JSON event streams, and debugging.

use alloy_primitives::{Address, B256};

use crate::domain::entities::NetworkId;

/// Event emitted during a deployment run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Run started with a computed plan
    Started {
        network: NetworkId,
        network_name: &'static str,
        plan_len: usize,
    },

    /// Contract already recorded in the ledger; no chain call
    ContractSkipped {
        index: usize,
        name: String,
        address: Address,
    },

    /// Placeholders resolved against the ledger
    ContractLinked {
        index: usize,
        name: String,
        libraries: usize,
    },

    /// Creation transaction submitted
    ContractSubmitted {
        index: usize,
        name: String,
        tx_hash: B256,
    },

    /// Deployment confirmed and appended to the ledger
    ContractDeployed {
        index: usize,
        name: String,
        address: Address,
    },

    /// Deployment failed; the rest of the plan is aborted
    ContractFailed {
        index: usize,
        name: String,
        error: String,
    },

    /// Run completed
    Completed {
        deployed_count: usize,
        skipped_count: usize,
        failed: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - Console sink: human progress lines
/// - JSON sink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
