use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::CoreError;

/// Dependency name to version constraint, in manifest order.
pub type DependencyMap = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    /// Lookup order used when searching a manifest for a dependency.
    pub const SEARCH_ORDER: [Self; 2] = [Self::Dependencies, Self::DevDependencies];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "dev_dependencies",
        }
    }
}

impl fmt::Display for DependencySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Snapshot of a package manifest taken at discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub path: PathBuf,
    pub manifest_path: PathBuf,
    pub dependencies: DependencyMap,
    pub dev_dependencies: DependencyMap,
}

impl Package {
    #[must_use]
    pub fn section(&self, section: DependencySection) -> &DependencyMap {
        match section {
            DependencySection::Dependencies => &self.dependencies,
            DependencySection::DevDependencies => &self.dev_dependencies,
        }
    }

    #[must_use]
    pub fn declares(&self, section: DependencySection, name: &str) -> bool {
        self.section(section).contains_key(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
    Custom(String),
}

impl VersionBump {
    /// # Errors
    ///
    /// Returns `CoreError::EmptyCustomVersion` if the trimmed input is empty.
    pub fn custom(version: impl Into<String>) -> Result<Self, CoreError> {
        let version = version.into();
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyCustomVersion);
        }
        Ok(Self::Custom(trimmed.to_string()))
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patch => f.write_str("patch"),
            Self::Minor => f.write_str("minor"),
            Self::Major => f.write_str("major"),
            Self::Custom(version) => write!(f, "custom ({version})"),
        }
    }
}

/// One line of release notes as typed by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry(String);

impl ChangelogEntry {
    /// # Errors
    ///
    /// Returns `CoreError::EmptyChangelogEntry` if the trimmed text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyChangelogEntry);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Renders the entry as a bullet line, keeping an existing bullet marker.
    #[must_use]
    pub fn render(&self) -> String {
        if self.0.starts_with("- ") || self.0.starts_with("* ") {
            self.0.clone()
        } else {
            format!("- {}", self.0)
        }
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
