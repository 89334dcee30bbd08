//! Isolated test environment for driving the stevedore binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a stevedore CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory plus a CLI runner.
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("failed to create project temp dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run stevedore from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_stevedore"))
            .current_dir(self.project_root.path())
            .env("TERM", "dumb")
            .args(args)
            .output()
            .expect("failed to execute stevedore");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file relative to the project root, creating parents
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&path, content).expect("failed to write file");
    }

    /// Write a deploy.toml manifest listing `contracts` in order
    pub fn write_manifest(&self, contracts: &[&str]) {
        let mut manifest = String::new();
        for name in contracts {
            manifest.push_str(&format!(
                "[[contracts]]\nname = \"{name}\"\nartifact = \"build/{name}.json\"\n\n"
            ));
        }
        self.write_file("deploy.toml", &manifest);
    }

    /// Write a Truffle-style artifact under build/
    pub fn write_artifact(&self, name: &str, bytecode: &str) {
        let artifact = format!(
            r#"{{"contractName": "{name}", "abi": [], "bytecode": "0x{bytecode}"}}"#
        );
        self.write_file(&format!("build/{name}.json"), &artifact);
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.project_path("stevedore.ledger")
    }

    /// Read the ledger file, empty string if absent
    pub fn read_ledger(&self) -> String {
        let path = self.ledger_path();
        if path.exists() {
            std::fs::read_to_string(&path).unwrap_or_default()
        } else {
            String::new()
        }
    }

    pub fn ledger_exists(&self) -> bool {
        self.ledger_path().exists()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
