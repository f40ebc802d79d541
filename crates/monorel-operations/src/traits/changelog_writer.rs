use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogWriteResult {
    pub path: PathBuf,
    pub created: bool,
}

pub trait ChangelogWriter: Send + Sync {
    /// Merges a rendered release block into the changelog at `changelog_path`,
    /// creating the file when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read or written.
    fn write_release(&self, changelog_path: &Path, block: &str) -> Result<ChangelogWriteResult>;
}
