use monorel_core::Package;
use monorel_manifest::DependencyWrite;
use tracing::{debug, info, warn};

use super::plan::ReleasePlan;
use crate::Result;
use crate::error::{DependencyUpdateError, OperationError};
use crate::traits::{ChangelogWriteResult, ChangelogWriter, ManifestWriter};

#[derive(Debug)]
pub enum DependencyUpdateOutcome {
    Updated {
        package: Package,
        write: DependencyWrite,
    },
    Failed {
        package: Package,
        error: DependencyUpdateError,
    },
}

impl DependencyUpdateOutcome {
    #[must_use]
    pub fn package(&self) -> &Package {
        match self {
            Self::Updated { package, .. } | Self::Failed { package, .. } => package,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug)]
pub struct AppliedChanges {
    pub changelog: ChangelogWriteResult,
    pub dependency_updates: Vec<DependencyUpdateOutcome>,
}

/// Writes a confirmed plan to disk.
///
/// Edits happen in a fixed order: the package's own manifest, its changelog,
/// then each dependent manifest. Nothing is rolled back.
pub struct ChangeApplier<'a, M, C> {
    manifest_writer: &'a M,
    changelog_writer: &'a C,
}

impl<'a, M, C> ChangeApplier<'a, M, C>
where
    M: ManifestWriter,
    C: ChangelogWriter,
{
    pub fn new(manifest_writer: &'a M, changelog_writer: &'a C) -> Self {
        Self {
            manifest_writer,
            changelog_writer,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the own-version update or the changelog write
    /// fails. Dependent failures are reported in the result instead.
    pub fn apply(&self, plan: &ReleasePlan) -> Result<AppliedChanges> {
        self.update_own_version(plan)?;
        let changelog = self.write_changelog(plan)?;
        let dependency_updates = self.update_dependents(plan);

        Ok(AppliedChanges {
            changelog,
            dependency_updates,
        })
    }

    /// Sets and re-reads the version in the released package's manifest.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::OwnVersionUpdate` if the write or the
    /// read-back verification fails.
    pub fn update_own_version(&self, plan: &ReleasePlan) -> Result<()> {
        let manifest_path = &plan.package.manifest_path;
        let wrap = |source| OperationError::OwnVersionUpdate {
            package: plan.package.name.clone(),
            source: Box::new(source),
        };

        self.manifest_writer
            .write_version(manifest_path, &plan.new_version)
            .map_err(wrap)?;
        self.manifest_writer
            .verify_version(manifest_path, &plan.new_version)
            .map_err(wrap)?;

        info!(
            package = %plan.package.name,
            from = %plan.package.version,
            to = %plan.new_version,
            "updated package version"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `OperationError::ChangelogWrite` if the changelog cannot be
    /// read or written.
    pub fn write_changelog(&self, plan: &ReleasePlan) -> Result<ChangelogWriteResult> {
        let result = self
            .changelog_writer
            .write_release(&plan.changelog_path, &plan.release_block)
            .map_err(|source| OperationError::ChangelogWrite {
                package: plan.package.name.clone(),
                version: plan.new_version.clone(),
                source: Box::new(source),
            })?;

        info!(
            path = %result.path.display(),
            created = result.created,
            "wrote changelog"
        );
        Ok(result)
    }

    /// Points every dependent at the new version, in discovery order.
    ///
    /// Each dependent succeeds or fails on its own.
    pub fn update_dependents(&self, plan: &ReleasePlan) -> Vec<DependencyUpdateOutcome> {
        let requirement = plan.dependency_requirement();

        plan.dependents
            .iter()
            .map(|dependent| {
                let package = dependent.package.clone();
                match self.update_dependent(&package, &plan.package.name, &requirement) {
                    Ok(write) => {
                        debug!(
                            package = %package.name,
                            field = %write.field,
                            requirement = %requirement,
                            "updated dependency"
                        );
                        DependencyUpdateOutcome::Updated { package, write }
                    }
                    Err(error) => {
                        warn!(package = %package.name, %error, "dependency update failed");
                        DependencyUpdateOutcome::Failed { package, error }
                    }
                }
            })
            .collect()
    }

    fn update_dependent(
        &self,
        dependent: &Package,
        target: &str,
        requirement: &str,
    ) -> std::result::Result<DependencyWrite, DependencyUpdateError> {
        self.manifest_writer
            .update_dependency(&dependent.manifest_path, target, requirement)
            .map_err(|source| DependencyUpdateError::Manifest(Box::new(source)))?
            .ok_or_else(|| DependencyUpdateError::NotDeclared {
                dependency: target.to_string(),
            })
    }
}
