//! Deploy Result
//!
//! Result types for deployment runs.

use alloy_primitives::Address;

/// Result of a deployment run
#[derive(Debug, Clone, Default)]
pub struct DeployResult {
    /// Plan order, as computed from the link graph
    pub plan: Vec<String>,
    /// Contracts deployed this run, with their addresses
    pub deployed: Vec<(String, Address)>,
    /// Contracts skipped because the ledger already records them
    pub skipped: Vec<(String, Address)>,
    /// Contracts a dry run would have deployed
    pub pending: Vec<String>,
    /// Errors encountered
    pub errors: Vec<String>,
    /// Contract whose failure aborted the run, if any
    pub failed: Option<String>,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.deployed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_result_is_success() {
        let result = DeployResult::new();
        assert!(result.is_success());
        assert!(!result.has_changes());
    }

    #[test]
    fn errors_mean_failure() {
        let mut result = DeployResult::new();
        result.errors.push("boom".to_string());
        assert!(!result.is_success());
    }
}
