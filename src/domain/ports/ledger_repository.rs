//! LedgerRepository port - abstraction for ledger persistence.
//!
//! This trait lets the orchestrator load and append to the ledger without
//! knowing about the on-disk format. Saves must be atomic: a partially
//! written ledger would break resume-after-failure.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::Ledger;

/// Result type for ledger persistence operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger persistence errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Invalid ledger format
    #[error("invalid ledger format: {0}")]
    InvalidFormat(String),

    /// The on-disk format version is not the one this build writes
    #[error("ledger format incompatible: found version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Abstract repository for ledger persistence.
///
/// A missing file is an empty ledger; an unreadable or corrupt file is an
/// error, never an empty ledger - treating corruption as empty would
/// re-deploy everything.
pub trait LedgerRepository {
    /// Load the ledger at `path`
    fn load(&self, path: &Path) -> LedgerResult<Ledger>;

    /// Persist the ledger atomically
    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()>;
}

impl<T: LedgerRepository + ?Sized> LedgerRepository for &T {
    fn load(&self, path: &Path) -> LedgerResult<Ledger> {
        (**self).load(path)
    }

    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()> {
        (**self).save(ledger, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_error_display() {
        let err = LedgerError::VersionMismatch {
            found: 9,
            expected: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("found version 9"));
        assert!(msg.contains("expected 1"));
    }
}
