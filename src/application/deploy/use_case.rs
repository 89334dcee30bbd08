//! Deploy Use Case
//!
//! Orchestrates a deployment run:
//! 1. Load contract specs from the manifest
//! 2. Build the link graph and the deployment plan
//! 3. Walk the plan: skip recorded contracts, link the rest against the
//!    ledger, submit, and append confirmed deployments
//!
//! This use case is pure orchestration - graph and linking logic live in
//! domain services, persistence and chain access behind ports. The ledger
//! is saved after every confirmed deployment so an aborted run can resume
//! from the failure point.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{bytecode_digest, ContractSpec, DeployedEntry, Ledger};
use crate::domain::ports::{
    ArtifactRepository, ChainClient, DeployEvent, DeployEventSink, LedgerRepository, NoopEventSink,
};
use crate::domain::services::{link_for_deploy, LinkGraph};
use crate::error::StevedoreError;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its dependencies (ports), allowing for easy testing
/// and different chain backends.
pub struct DeployUseCase<AR, LR, CC>
where
    AR: ArtifactRepository,
    LR: LedgerRepository,
    CC: ChainClient,
{
    artifact_repo: AR,
    ledger_repo: LR,
    chain: CC,
}

impl<AR, LR, CC> DeployUseCase<AR, LR, CC>
where
    AR: ArtifactRepository,
    LR: LedgerRepository,
    CC: ChainClient,
{
    pub fn new(artifact_repo: AR, ledger_repo: LR, chain: CC) -> Self {
        Self {
            artifact_repo,
            ledger_repo,
            chain,
        }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> DeployResult {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult {
        let mut result = DeployResult::new();

        // Step 1: Load specs
        let specs = match self.artifact_repo.load_all(&options.manifest) {
            Ok(specs) => specs,
            Err(e) => {
                result.errors.push(e.to_string());
                return result;
            }
        };

        // Step 2: Graph + plan. Graph errors are fatal before any chain call.
        let plan = match LinkGraph::build(&specs) {
            Ok(graph) => graph.plan(),
            Err(e) => {
                result.errors.push(e.to_string());
                return result;
            }
        };
        result.plan = plan.order().to_vec();

        // The chain client is constructed for options.network; a mismatch
        // would record ledger entries under the wrong network key.
        let network = self.chain.network();
        if network != options.network {
            result.errors.push(format!(
                "chain client is connected to network {network}, but options request network {}",
                options.network
            ));
            return result;
        }

        event_sink.on_event(DeployEvent::Started {
            network,
            network_name: network.name(),
            plan_len: plan.len(),
        });

        // Step 3: Walk the plan against the ledger
        let mut ledger = match self.ledger_repo.load(&options.ledger_path) {
            Ok(ledger) => ledger,
            Err(e) => {
                result.errors.push(format!("failed to load ledger: {e}"));
                return result;
            }
        };
        let by_name: BTreeMap<&str, &ContractSpec> =
            specs.iter().map(|s| (s.name(), s)).collect();

        for (index, name) in plan.order().iter().enumerate() {
            let spec = by_name[name.as_str()];

            // Idempotent skip: the ledger is authoritative
            if let Some(entry) = ledger.latest(network, name) {
                result.skipped.push((name.clone(), entry.address()));
                event_sink.on_event(DeployEvent::ContractSkipped {
                    index,
                    name: name.clone(),
                    address: entry.address(),
                });
                continue;
            }

            if options.dry_run {
                result.pending.push(name.clone());
                continue;
            }

            match self.deploy_one(index, spec, &ledger, &event_sink) {
                Ok(entry) => {
                    let address = entry.address();
                    ledger.append(entry);
                    // Persist immediately: committed progress must survive
                    // an abort of the remaining plan.
                    if let Err(e) = self.ledger_repo.save(&ledger, &options.ledger_path) {
                        result
                            .errors
                            .push(format!("failed to save ledger: {e}"));
                        result.failed = Some(name.clone());
                        break;
                    }
                    result.deployed.push((name.clone(), address));
                    event_sink.on_event(DeployEvent::ContractDeployed {
                        index,
                        name: name.clone(),
                        address,
                    });
                }
                Err(e) => {
                    result.errors.push(e.to_string());
                    result.failed = Some(name.clone());
                    event_sink.on_event(DeployEvent::ContractFailed {
                        index,
                        name: name.clone(),
                        error: e.to_string(),
                    });
                    break;
                }
            }
        }

        event_sink.on_event(DeployEvent::Completed {
            deployed_count: result.deployed.len(),
            skipped_count: result.skipped.len(),
            failed: result.failed.is_some(),
        });

        result
    }

    /// Link, submit, and confirm a single contract.
    fn deploy_one(
        &self,
        index: usize,
        spec: &ContractSpec,
        ledger: &Ledger,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> Result<DeployedEntry, StevedoreError> {
        let network = self.chain.network();

        let code = link_for_deploy(spec, ledger, network)?;
        event_sink.on_event(DeployEvent::ContractLinked {
            index,
            name: spec.name().to_string(),
            libraries: spec.library_refs().len(),
        });

        let tx_hash = self
            .chain
            .submit(&code)
            .map_err(|e| StevedoreError::Deployment {
                name: spec.name().to_string(),
                cause: e.to_string(),
            })?;
        event_sink.on_event(DeployEvent::ContractSubmitted {
            index,
            name: spec.name().to_string(),
            tx_hash,
        });

        let address = self
            .chain
            .confirm(tx_hash)
            .map_err(|e| StevedoreError::Deployment {
                name: spec.name().to_string(),
                cause: e.to_string(),
            })?;

        Ok(DeployedEntry::new(
            spec.name(),
            address,
            network,
            tx_hash,
            bytecode_digest(&code),
            Utc::now(),
        ))
    }
}
