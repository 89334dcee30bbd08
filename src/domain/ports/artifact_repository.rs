//! ArtifactRepository port - abstraction for loading compiled artifacts.
//!
//! Maps the symbolic names in a deployment manifest to `ContractSpec`s
//! without the domain layer knowing about JSON files on disk.

use std::path::Path;

use crate::domain::entities::ContractSpec;
use crate::error::StevedoreResult;

/// Abstract repository for compiled contract artifacts.
///
/// Implementations must return specs in manifest declaration order; the
/// planner uses that order as its deterministic tie-break.
pub trait ArtifactRepository {
    /// Load every contract named by the manifest at `manifest_path`
    fn load_all(&self, manifest_path: &Path) -> StevedoreResult<Vec<ContractSpec>>;
}

impl<T: ArtifactRepository + ?Sized> ArtifactRepository for &T {
    fn load_all(&self, manifest_path: &Path) -> StevedoreResult<Vec<ContractSpec>> {
        (**self).load_all(manifest_path)
    }
}
