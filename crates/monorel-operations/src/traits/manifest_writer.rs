use std::path::Path;

use monorel_manifest::DependencyWrite;

use crate::Result;

pub trait ManifestWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn write_version(&self, manifest_path: &Path, new_version: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the version does not match the expected value.
    fn verify_version(&self, manifest_path: &Path, expected: &str) -> Result<()>;

    /// Sets the requirement of an existing dependency entry.
    ///
    /// Returns `Ok(None)` when the manifest declares `dependency_name` in
    /// neither dependency section.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn update_dependency(
        &self,
        manifest_path: &Path,
        dependency_name: &str,
        requirement: &str,
    ) -> Result<Option<DependencyWrite>>;
}
