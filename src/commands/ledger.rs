use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use stevedore::domain::entities::NetworkId;
use stevedore::domain::ports::LedgerRepository;
use stevedore::infrastructure::TomlLedgerRepository;

#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    name: &'a str,
    network: u64,
    address: String,
    tx_hash: String,
    deployed_at: String,
}

pub fn run(ledger_path: PathBuf, network: Option<u64>, json: bool) -> Result<i32> {
    let repo = TomlLedgerRepository::new();
    let ledger = repo
        .load(&ledger_path)
        .with_context(|| format!("failed to read ledger {}", ledger_path.display()))?;

    let network = network.map(NetworkId::new);
    let mut rows = Vec::new();
    for (_, history) in ledger.entries() {
        // Only the newest entry per key is live; history stays in the file.
        if let Some(entry) = history.last() {
            if network.is_some_and(|n| entry.network() != n) {
                continue;
            }
            rows.push(LedgerRow {
                name: entry.name(),
                network: entry.network().value(),
                address: format!("{:#x}", entry.address()),
                tx_hash: format!("{:#x}", entry.tx_hash()),
                deployed_at: entry.deployed_at().to_rfc3339(),
            });
        }
    }

    if json {
        for row in &rows {
            println!("{}", serde_json::to_string(row)?);
        }
    } else if rows.is_empty() {
        println!("No recorded deployments in {}", ledger_path.display());
    } else {
        for row in &rows {
            println!(
                "{} (network {}) {} tx {} at {}",
                row.name, row.network, row.address, row.tx_hash, row.deployed_at
            );
        }
    }

    Ok(0)
}
