//! JSON Artifact Repository
//!
//! Implements the ArtifactRepository port over a TOML manifest plus
//! Truffle-style JSON artifact files.
//!
//! Manifest shape:
//!
//! ```toml
//! [[contracts]]
//! name = "CDTLibrary"
//! artifact = "build/CDTLibrary.json"
//!
//! [[contracts]]
//! name = "Registry"
//! artifact = "build/Registry.json"
//! libraries = ["CDTLibrary"]
//! ```
//!
//! Artifact files carry `contractName`, `abi`, and `bytecode`; unknown keys
//! are ignored so artifacts produced by full compiler toolchains load as-is.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{Bytecode, ContractSpec};
use crate::domain::ports::ArtifactRepository;
use crate::error::{StevedoreError, StevedoreResult};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    contracts: Vec<ManifestContract>,
}

#[derive(Debug, Deserialize)]
struct ManifestContract {
    name: String,
    artifact: PathBuf,
    #[serde(default)]
    libraries: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ArtifactJson {
    #[serde(rename = "contractName")]
    contract_name: Option<String>,
    #[serde(default)]
    abi: serde_json::Value,
    bytecode: String,
}

/// Loads contract specs from a manifest and its referenced artifacts.
#[derive(Debug, Default)]
pub struct JsonArtifactRepository;

impl JsonArtifactRepository {
    pub fn new() -> Self {
        Self
    }

    fn load_artifact(&self, path: &Path) -> StevedoreResult<ArtifactJson> {
        let content = fs::read_to_string(path).map_err(|e| StevedoreError::InvalidArtifact {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| StevedoreError::InvalidArtifact {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl ArtifactRepository for JsonArtifactRepository {
    fn load_all(&self, manifest_path: &Path) -> StevedoreResult<Vec<ContractSpec>> {
        let content =
            fs::read_to_string(manifest_path).map_err(|e| StevedoreError::InvalidManifest {
                path: manifest_path.to_path_buf(),
                message: e.to_string(),
            })?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| StevedoreError::InvalidManifest {
                path: manifest_path.to_path_buf(),
                message: e.to_string(),
            })?;

        let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        let mut seen = BTreeSet::new();
        let mut specs = Vec::with_capacity(manifest.contracts.len());

        for contract in manifest.contracts {
            if !seen.insert(contract.name.clone()) {
                return Err(StevedoreError::InvalidManifest {
                    path: manifest_path.to_path_buf(),
                    message: format!("duplicate contract '{}'", contract.name),
                });
            }

            let artifact_path = base.join(&contract.artifact);
            let artifact = self.load_artifact(&artifact_path)?;

            if let Some(artifact_name) = &artifact.contract_name {
                if artifact_name != &contract.name {
                    return Err(StevedoreError::InvalidArtifact {
                        path: artifact_path,
                        message: format!(
                            "artifact is for '{artifact_name}', manifest names it '{}'",
                            contract.name
                        ),
                    });
                }
            }

            specs.push(
                ContractSpec::new(
                    contract.name,
                    artifact.abi,
                    Bytecode::new(artifact.bytecode),
                )
                .with_declared_libraries(contract.libraries),
            );
        }

        Ok(specs)
    }
}
