//! Deployment ledger entity - records confirmed deployments.
//!
//! The ledger is the authority for what is already deployed on a network.
//! It is a pure data structure; persistence is handled by LedgerRepository.
//! Entries are append-only: a re-deployment appends a superseding entry and
//! never rewrites history.

use std::collections::BTreeMap;

use alloy_primitives::{Address, B256};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::network::NetworkId;

/// Content digest of deployed bytecode, recorded for audit.
pub fn bytecode_digest(code: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code);
    format!("sha256:{:x}", hasher.finalize())
}

/// A confirmed deployment. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedEntry {
    name: String,
    address: Address,
    network: NetworkId,
    tx_hash: B256,
    bytecode_hash: String,
    deployed_at: DateTime<Utc>,
}

impl DeployedEntry {
    pub fn new(
        name: impl Into<String>,
        address: Address,
        network: NetworkId,
        tx_hash: B256,
        bytecode_hash: impl Into<String>,
        deployed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            network,
            tx_hash,
            bytecode_hash: bytecode_hash.into(),
            deployed_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn tx_hash(&self) -> B256 {
        self.tx_hash
    }

    pub fn bytecode_hash(&self) -> &str {
        &self.bytecode_hash
    }

    pub fn deployed_at(&self) -> DateTime<Utc> {
        self.deployed_at
    }
}

/// The deployment ledger.
///
/// Keys are formatted as `{network_id}:{contract_name}` so a single ledger
/// can track deployments across networks. Each key holds the full append
/// history; lookups resolve to the newest entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    version: u32,
    entries: BTreeMap<String, Vec<DeployedEntry>>,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tracked (network, contract) keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Generate a ledger key from network and contract name
    pub fn make_key(network: NetworkId, name: &str) -> String {
        format!("{}:{}", network.value(), name)
    }

    /// Parse a ledger key into network and contract name
    pub fn parse_key(key: &str) -> Option<(NetworkId, &str)> {
        let (network, name) = key.split_once(':')?;
        let network: u64 = network.parse().ok()?;
        Some((NetworkId::new(network), name))
    }

    /// Newest entry for a contract on a network, if any
    pub fn latest(&self, network: NetworkId, name: &str) -> Option<&DeployedEntry> {
        self.entries
            .get(&Self::make_key(network, name))
            .and_then(|history| history.last())
    }

    /// Newest recorded address for a contract on a network
    pub fn address_of(&self, network: NetworkId, name: &str) -> Option<Address> {
        self.latest(network, name).map(|entry| entry.address())
    }

    /// Whether a contract has any recorded deployment on a network
    pub fn contains(&self, network: NetworkId, name: &str) -> bool {
        self.latest(network, name).is_some()
    }

    /// Append an entry. Never overwrites; history is preserved.
    pub fn append(&mut self, entry: DeployedEntry) {
        let key = Self::make_key(entry.network(), entry.name());
        self.entries.entry(key).or_default().push(entry);
    }

    /// All entries grouped by key, oldest first within a key
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[DeployedEntry])> {
        self.entries
            .iter()
            .map(|(key, history)| (key.as_str(), history.as_slice()))
    }

    /// Newest entries for one network, in key order
    pub fn for_network(&self, network: NetworkId) -> impl Iterator<Item = &DeployedEntry> {
        self.entries.values().filter_map(move |history| {
            history
                .last()
                .filter(|entry| entry.network() == network)
        })
    }
}
