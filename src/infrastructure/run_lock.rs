//! Per-network run lock.
//!
//! Two concurrent runs against the same network would race on the ledger
//! file and could double-deploy contracts. An exclusive advisory lock on a
//! sidecar file next to the ledger serializes them; a second run fails fast
//! instead of queueing.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::entities::NetworkId;
use crate::error::{StevedoreError, StevedoreResult};

/// Exclusive per-network lock, held for the lifetime of a deployment run.
/// Released on drop.
#[derive(Debug)]
pub struct RunLock {
    file: File,
}

impl RunLock {
    /// Acquire the lock for `network`, placing the lock file in the same
    /// directory as the ledger.
    pub fn acquire(ledger_path: &Path, network: NetworkId) -> StevedoreResult<Self> {
        let path = Self::lock_path(ledger_path, network);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        file.try_lock_exclusive().map_err(|err| {
            if err.kind() == std::io::ErrorKind::WouldBlock {
                StevedoreError::RunLocked {
                    network: network.value(),
                }
            } else {
                StevedoreError::Io(err)
            }
        })?;

        Ok(Self { file })
    }

    fn lock_path(ledger_path: &Path, network: NetworkId) -> PathBuf {
        let dir = ledger_path.parent().unwrap_or_else(|| Path::new("."));
        dir.join(format!(".stevedore-{network}.lock"))
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
