use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CONFIG_FILE_NAME;
use crate::error::WorkspaceError;

const DEFAULT_PACKAGES_DIR: &str = "packages";
const DEFAULT_MANIFEST: &str = "package.toml";
const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";
const DEFAULT_PUBLISH_COMMAND: [&str; 2] = ["cargo", "publish"];

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    packages_dir: Option<PathBuf>,
    manifest: Option<String>,
    changelog: Option<String>,
    publish: Option<RawPublishConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPublishConfig {
    command: Option<Vec<String>>,
}

/// Workspace settings read from `monorel.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    packages_dir: PathBuf,
    manifest: String,
    changelog: String,
    publish_command: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            manifest: DEFAULT_MANIFEST.to_string(),
            changelog: DEFAULT_CHANGELOG.to_string(),
            publish_command: DEFAULT_PUBLISH_COMMAND.map(String::from).to_vec(),
        }
    }
}

impl WorkspaceConfig {
    /// Packages directory, relative to the workspace root.
    #[must_use]
    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    /// File name of the manifest inside each package directory.
    #[must_use]
    pub fn manifest(&self) -> &str {
        &self.manifest
    }

    /// File name of the changelog inside each package directory.
    #[must_use]
    pub fn changelog(&self) -> &str {
        &self.changelog
    }

    /// Program and arguments run in a package directory to publish it.
    #[must_use]
    pub fn publish_command(&self) -> &[String] {
        &self.publish_command
    }

    #[must_use]
    pub fn with_packages_dir(mut self, packages_dir: impl Into<PathBuf>) -> Self {
        self.packages_dir = packages_dir.into();
        self
    }

    #[must_use]
    pub fn with_publish_command(mut self, command: Vec<String>) -> Self {
        self.publish_command = command;
        self
    }
}

/// Loads `monorel.toml` from `root`, falling back to defaults when absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed, or
/// contains invalid values.
pub fn load_config(root: &Path) -> Result<WorkspaceConfig, WorkspaceError> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(WorkspaceConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| WorkspaceError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    parse_config(&content, &path)
}

/// # Errors
///
/// Returns `WorkspaceError::ConfigParse` for malformed TOML or unknown keys and
/// `WorkspaceError::InvalidConfig` for empty values.
pub fn parse_config(content: &str, path: &Path) -> Result<WorkspaceConfig, WorkspaceError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| WorkspaceError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = WorkspaceConfig::default();

    if let Some(packages_dir) = raw.packages_dir {
        config.packages_dir = packages_dir;
    }

    if let Some(manifest) = raw.manifest {
        if manifest.trim().is_empty() {
            return Err(invalid(path, "manifest file name cannot be empty"));
        }
        config.manifest = manifest;
    }

    if let Some(changelog) = raw.changelog {
        if changelog.trim().is_empty() {
            return Err(invalid(path, "changelog file name cannot be empty"));
        }
        config.changelog = changelog;
    }

    if let Some(command) = raw.publish.and_then(|publish| publish.command) {
        if command.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(invalid(path, "publish command cannot be empty"));
        }
        config.publish_command = command;
    }

    Ok(config)
}

fn invalid(path: &Path, reason: &'static str) -> WorkspaceError {
    WorkspaceError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    }
}
