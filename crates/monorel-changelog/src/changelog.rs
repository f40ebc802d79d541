use std::path::Path;

use crate::error::ChangelogError;
use crate::format::merge_release;

/// Changelog document content, empty when the file does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the changelog at `path`; a missing file yields an empty changelog.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self, ChangelogError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn add_block(&mut self, block: &str) {
        self.content = merge_release(&self.content, block);
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, &self.content).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
