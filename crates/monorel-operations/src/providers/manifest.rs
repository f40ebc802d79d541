use std::path::Path;

use monorel_manifest::DependencyWrite;

use crate::Result;
use crate::traits::ManifestWriter;

pub struct FileSystemManifestWriter;

impl FileSystemManifestWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for FileSystemManifestWriter {
    fn write_version(&self, manifest_path: &Path, new_version: &str) -> Result<()> {
        Ok(monorel_manifest::write_version(manifest_path, new_version)?)
    }

    fn verify_version(&self, manifest_path: &Path, expected: &str) -> Result<()> {
        Ok(monorel_manifest::verify_version(manifest_path, expected)?)
    }

    fn update_dependency(
        &self,
        manifest_path: &Path,
        dependency_name: &str,
        requirement: &str,
    ) -> Result<Option<DependencyWrite>> {
        Ok(monorel_manifest::update_dependency(
            manifest_path,
            dependency_name,
            requirement,
        )?)
    }
}
