use monorel_core::{ChangelogEntry, Package, VersionBump};

use crate::Result;
use crate::operations::ReleasePlan;

#[derive(Debug, Clone)]
pub enum PackageSelection {
    Selected(Package),
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum BumpSelection {
    Selected(VersionBump),
    Cancelled,
}

/// The operator-facing decision points of a release.
pub trait InteractionProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select_package(&self, available: &[Package]) -> Result<PackageSelection>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select_bump(&self, package: &Package) -> Result<BumpSelection>;

    /// Collects release notes in input order. An empty list means none were given.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn collect_changelog_entries(&self, package: &Package) -> Result<Vec<ChangelogEntry>>;

    /// Shows the release summary and asks whether to apply it.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm_release(&self, plan: &ReleasePlan) -> Result<bool>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm_publish(&self, package: &Package, default: bool) -> Result<bool>;
}
