//! NDJSON event stream for CI.
//!
//! One JSON object per line on stdout, each tagged with an `event` field.
//! Field names are stable; consumers should ignore unknown fields.

use serde::Serialize;

use stevedore::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Debug, Clone, Serialize)]
struct StartedEvent {
    event: &'static str,
    version: &'static str,
    network: u64,
    network_name: &'static str,
    plan_len: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ContractEvent {
    event: &'static str,
    index: usize,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    libraries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ContractEvent {
    fn new(event: &'static str, index: usize, name: String) -> Self {
        Self {
            event,
            index,
            name,
            address: None,
            tx_hash: None,
            libraries: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct CompletedEvent {
    event: &'static str,
    deployed: usize,
    skipped: usize,
    success: bool,
}

/// Emits NDJSON deploy events on stdout.
pub struct JsonEventSink;

impl JsonEventSink {
    fn emit<T: Serialize>(&self, event: &T) {
        if let Ok(line) = serde_json::to_string(event) {
            println!("{line}");
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                network,
                network_name,
                plan_len,
            } => self.emit(&StartedEvent {
                event: "started",
                version: env!("CARGO_PKG_VERSION"),
                network: network.value(),
                network_name,
                plan_len,
            }),
            DeployEvent::ContractSkipped {
                index,
                name,
                address,
            } => self.emit(&ContractEvent {
                address: Some(format!("{address:#x}")),
                ..ContractEvent::new("skipped", index, name)
            }),
            DeployEvent::ContractLinked {
                index,
                name,
                libraries,
            } => self.emit(&ContractEvent {
                libraries: Some(libraries),
                ..ContractEvent::new("linked", index, name)
            }),
            DeployEvent::ContractSubmitted {
                index,
                name,
                tx_hash,
            } => self.emit(&ContractEvent {
                tx_hash: Some(format!("{tx_hash:#x}")),
                ..ContractEvent::new("submitted", index, name)
            }),
            DeployEvent::ContractDeployed {
                index,
                name,
                address,
            } => self.emit(&ContractEvent {
                address: Some(format!("{address:#x}")),
                ..ContractEvent::new("deployed", index, name)
            }),
            DeployEvent::ContractFailed { index, name, error } => self.emit(&ContractEvent {
                error: Some(error),
                ..ContractEvent::new("failed", index, name)
            }),
            DeployEvent::Completed {
                deployed_count,
                skipped_count,
                failed,
            } => self.emit(&CompletedEvent {
                event: "completed",
                deployed: deployed_count,
                skipped: skipped_count,
                success: !failed,
            }),
        }
    }
}
