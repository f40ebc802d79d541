use std::fmt;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use monorel_changelog::format_release_block;
use monorel_version::resolve_version;
use tracing::{debug, info};

use super::apply::{ChangeApplier, DependencyUpdateOutcome};
use super::dependents::find_dependents;
use super::plan::ReleasePlan;
use super::publish::{PublishOutcome, Publisher};
use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    BumpSelection, ChangelogWriteResult, ChangelogWriter, InteractionProvider, ManifestWriter,
    PackageSelection, ProcessRunner, WorkspaceProvider,
};

#[derive(Debug, Clone, Copy)]
pub struct ReleaseInput {
    pub dry_run: bool,
    /// Date stamped on the release block.
    pub release_date: NaiveDate,
}

impl ReleaseInput {
    /// Input dated today in UTC.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            release_date: Utc::now().date_naive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    NoPackages,
    NoPackageSelected,
    BumpCancelled,
    NoChangelogEntries,
    Declined,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoPackages => "no packages found",
            Self::NoPackageSelected => "no package selected",
            Self::BumpCancelled => "version selection cancelled",
            Self::NoChangelogEntries => "no changelog entries provided",
            Self::Declined => "release declined",
        };
        f.write_str(message)
    }
}

#[derive(Debug)]
pub struct ReleaseReport {
    pub plan: ReleasePlan,
    pub changelog: ChangelogWriteResult,
    pub dependency_updates: Vec<DependencyUpdateOutcome>,
    pub publish_results: Vec<PublishOutcome>,
}

impl ReleaseReport {
    /// Whether any dependent update or publish step failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.dependency_updates
            .iter()
            .any(DependencyUpdateOutcome::is_failure)
            || self.publish_results.iter().any(PublishOutcome::is_failure)
    }
}

#[derive(Debug)]
pub enum ReleaseOutcome {
    Aborted(AbortReason),
    DryRun(ReleasePlan),
    Completed(ReleaseReport),
}

pub struct ReleaseOperation<W, I, M, C, R> {
    workspace_provider: W,
    interaction: I,
    manifest_writer: M,
    changelog_writer: C,
    process_runner: R,
}

impl<W, I, M, C, R> ReleaseOperation<W, I, M, C, R>
where
    W: WorkspaceProvider,
    I: InteractionProvider,
    M: ManifestWriter,
    C: ChangelogWriter,
    R: ProcessRunner,
{
    pub fn new(
        workspace_provider: W,
        interaction: I,
        manifest_writer: M,
        changelog_writer: C,
        process_runner: R,
    ) -> Self {
        Self {
            workspace_provider,
            interaction,
            manifest_writer,
            changelog_writer,
            process_runner,
        }
    }

    /// Runs one release from package selection through publishing.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails, the current version cannot be
    /// bumped, an interaction fails, or the own-version or changelog edit
    /// fails. Dependent and publish failures are part of the report.
    pub fn execute(&self, start_path: &Path, input: &ReleaseInput) -> Result<ReleaseOutcome> {
        let workspace = self.workspace_provider.discover_workspace(start_path)?;
        info!(
            root = %workspace.root.display(),
            packages = workspace.packages.len(),
            "discovered workspace"
        );

        if workspace.packages.is_empty() {
            return Ok(ReleaseOutcome::Aborted(AbortReason::NoPackages));
        }

        let PackageSelection::Selected(package) =
            self.interaction.select_package(&workspace.packages)?
        else {
            return Ok(ReleaseOutcome::Aborted(AbortReason::NoPackageSelected));
        };
        debug!(package = %package.name, version = %package.version, "selected package");

        let BumpSelection::Selected(bump) = self.interaction.select_bump(&package)? else {
            return Ok(ReleaseOutcome::Aborted(AbortReason::BumpCancelled));
        };

        let new_version = resolve_version(&package.version, &bump).map_err(|source| {
            OperationError::VersionResolution {
                package: package.name.clone(),
                source,
            }
        })?;
        debug!(%bump, %new_version, "resolved version");

        let entries = self.interaction.collect_changelog_entries(&package)?;
        if entries.is_empty() {
            return Ok(ReleaseOutcome::Aborted(AbortReason::NoChangelogEntries));
        }

        let dependents = find_dependents(&workspace.packages, &package.name);
        debug!(count = dependents.len(), "found dependents");

        let plan = ReleasePlan {
            release_block: format_release_block(&new_version, input.release_date, &entries),
            changelog_path: workspace.changelog_path(&package),
            package,
            bump,
            new_version,
            entries,
            dependents,
            dry_run: input.dry_run,
        };

        if input.dry_run {
            info!("dry run, no changes applied");
            return Ok(ReleaseOutcome::DryRun(plan));
        }

        if !self.interaction.confirm_release(&plan)? {
            return Ok(ReleaseOutcome::Aborted(AbortReason::Declined));
        }

        let applied =
            ChangeApplier::new(&self.manifest_writer, &self.changelog_writer).apply(&plan)?;

        let publish_results = Publisher::new(
            &self.interaction,
            &self.process_runner,
            workspace.config.publish_command(),
        )
        .run(&plan, &applied.dependency_updates)?;

        Ok(ReleaseOutcome::Completed(ReleaseReport {
            plan,
            changelog: applied.changelog,
            dependency_updates: applied.dependency_updates,
            publish_results,
        }))
    }
}
