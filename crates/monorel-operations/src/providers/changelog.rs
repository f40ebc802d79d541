use std::path::Path;

use monorel_changelog::Changelog;

use crate::Result;
use crate::traits::{ChangelogWriteResult, ChangelogWriter};

pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn write_release(&self, changelog_path: &Path, block: &str) -> Result<ChangelogWriteResult> {
        let created = !changelog_path.exists();

        let mut changelog = Changelog::load(changelog_path)?;
        changelog.add_block(block);
        changelog.write_to_file(changelog_path)?;

        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }
}
