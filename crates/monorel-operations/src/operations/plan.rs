use std::path::PathBuf;

use monorel_core::{ChangelogEntry, Package, VersionBump};

use super::dependents::DependentPackage;

/// Everything decided for one release before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub package: Package,
    pub bump: VersionBump,
    pub new_version: String,
    pub entries: Vec<ChangelogEntry>,
    pub release_block: String,
    pub changelog_path: PathBuf,
    pub dependents: Vec<DependentPackage>,
    pub dry_run: bool,
}

impl ReleasePlan {
    #[must_use]
    pub fn current_version(&self) -> &str {
        &self.package.version
    }

    /// Caret requirement written into every dependent manifest.
    #[must_use]
    pub fn dependency_requirement(&self) -> String {
        format!("^{}", self.new_version)
    }
}
