//! TOML Ledger Repository
//!
//! Implements the LedgerRepository port using TOML format. Saves go through
//! a temp file in the same directory followed by a rename, so a crashed run
//! never leaves a half-written ledger behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::{Address, B256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{DeployedEntry, Ledger};
use crate::domain::ports::{LedgerError, LedgerRepository, LedgerResult};

/// TOML-based ledger repository
///
/// Stores the ledger as `stevedore.ledger` in TOML format.
#[derive(Debug, Default)]
pub struct TomlLedgerRepository;

impl TomlLedgerRepository {
    pub fn new() -> Self {
        Self
    }
}

/// TOML representation of one deployment record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlEntry {
    name: String,
    address: String,
    network: u64,
    tx_hash: String,
    bytecode_hash: String,
    deployed_at: DateTime<Utc>,
}

/// TOML representation of the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlLedger {
    version: u32,
    #[serde(default)]
    deployments: BTreeMap<String, Vec<TomlEntry>>,
}

impl LedgerRepository for TomlLedgerRepository {
    fn load(&self, path: &Path) -> LedgerResult<Ledger> {
        if !path.exists() {
            return Ok(Ledger::new());
        }

        let content = fs::read_to_string(path).map_err(|e| LedgerError::Io(e.to_string()))?;
        let toml_ledger: TomlLedger =
            toml::from_str(&content).map_err(|e| LedgerError::InvalidFormat(e.to_string()))?;

        let expected_version = Ledger::new().version();
        if toml_ledger.version != expected_version {
            return Err(LedgerError::VersionMismatch {
                found: toml_ledger.version,
                expected: expected_version,
            });
        }

        let mut ledger = Ledger::new();
        for (key, history) in toml_ledger.deployments {
            let Some((network, name)) = Ledger::parse_key(&key) else {
                return Err(LedgerError::InvalidFormat(format!("bad key '{key}'")));
            };
            for entry in history {
                if entry.name != name || entry.network != network.value() {
                    return Err(LedgerError::InvalidFormat(format!(
                        "entry under key '{key}' names '{}' on network {}",
                        entry.name, entry.network
                    )));
                }
                let address = Address::from_str(&entry.address)
                    .map_err(|e| LedgerError::InvalidFormat(e.to_string()))?;
                let tx_hash = B256::from_str(&entry.tx_hash)
                    .map_err(|e| LedgerError::InvalidFormat(e.to_string()))?;
                ledger.append(DeployedEntry::new(
                    entry.name,
                    address,
                    network,
                    tx_hash,
                    entry.bytecode_hash,
                    entry.deployed_at,
                ));
            }
        }

        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()> {
        let mut deployments = BTreeMap::new();
        for (key, history) in ledger.entries() {
            let records: Vec<TomlEntry> = history
                .iter()
                .map(|entry| TomlEntry {
                    name: entry.name().to_string(),
                    address: format!("{:#x}", entry.address()),
                    network: entry.network().value(),
                    tx_hash: format!("{:#x}", entry.tx_hash()),
                    bytecode_hash: entry.bytecode_hash().to_string(),
                    deployed_at: entry.deployed_at(),
                })
                .collect();
            deployments.insert(key.to_string(), records);
        }

        let toml_ledger = TomlLedger {
            version: ledger.version(),
            deployments,
        };

        let content = toml::to_string_pretty(&toml_ledger)
            .map_err(|e| LedgerError::InvalidFormat(e.to_string()))?;

        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir).map_err(|e| LedgerError::Io(e.to_string()))?;
        }
        let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
            .map_err(|e| LedgerError::Io(e.to_string()))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| LedgerError::Io(e.to_string()))?;
        tmp.persist(path).map_err(|e| LedgerError::Io(e.to_string()))?;

        Ok(())
    }
}
