use std::collections::HashMap;
use std::path::{Path, PathBuf};

use monorel_core::Package;

use crate::CONFIG_FILE_NAME;
use crate::config::{WorkspaceConfig, load_config};
use crate::error::WorkspaceError;
use crate::manifest::{PackageManifest, into_dependency_map};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: WorkspaceConfig,
    pub packages: Vec<Package>,
}

impl Workspace {
    #[must_use]
    pub fn changelog_path(&self, package: &Package) -> PathBuf {
        package.path.join(self.config.changelog())
    }
}

/// # Errors
///
/// Returns `WorkspaceError` if the start directory cannot be resolved, the
/// configuration is invalid, or package discovery fails.
pub fn discover_workspace(start_dir: &Path) -> Result<Workspace, WorkspaceError> {
    let root = find_workspace_root(start_dir)?;
    let config = load_config(&root)?;
    let packages = discover_packages(&root, &config)?;

    Ok(Workspace {
        root,
        config,
        packages,
    })
}

/// Walks up from `start_dir` to the nearest directory holding `monorel.toml`.
///
/// Without a configuration file anywhere above, `start_dir` itself is the root.
///
/// # Errors
///
/// Returns `WorkspaceError::StartDir` if `start_dir` cannot be canonicalized.
pub fn find_workspace_root(start_dir: &Path) -> Result<PathBuf, WorkspaceError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| WorkspaceError::StartDir {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = start_dir
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
        .unwrap_or(&start_dir)
        .to_path_buf();

    Ok(root)
}

/// Lists the packages under the configured packages directory.
///
/// Every immediate subdirectory holding a manifest is a package. Packages are
/// returned in directory listing order. A malformed manifest fails the whole
/// discovery instead of being skipped.
///
/// # Errors
///
/// Returns `WorkspaceError::PackagesDirNotFound` if the packages directory is
/// missing, a manifest error for unreadable or incomplete manifests, and
/// `WorkspaceError::DuplicatePackage` if two manifests share a name.
pub fn discover_packages(
    root: &Path,
    config: &WorkspaceConfig,
) -> Result<Vec<Package>, WorkspaceError> {
    let packages_dir = root.join(config.packages_dir());
    if !packages_dir.is_dir() {
        return Err(WorkspaceError::PackagesDirNotFound { path: packages_dir });
    }

    let read_dir_error = |source| WorkspaceError::PackagesDirRead {
        path: packages_dir.clone(),
        source,
    };

    let mut packages = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for entry in std::fs::read_dir(&packages_dir).map_err(read_dir_error)? {
        let dir = entry.map_err(read_dir_error)?.path();
        if !dir.is_dir() {
            continue;
        }

        let manifest_path = dir.join(config.manifest());
        if !manifest_path.is_file() {
            continue;
        }

        let package = read_package(&dir, &manifest_path)?;

        if let Some(first) = seen.insert(package.name.clone(), dir.clone()) {
            return Err(WorkspaceError::DuplicatePackage {
                name: package.name,
                first,
                second: dir,
            });
        }

        packages.push(package);
    }

    Ok(packages)
}

fn read_package(dir: &Path, manifest_path: &Path) -> Result<Package, WorkspaceError> {
    let content =
        std::fs::read_to_string(manifest_path).map_err(|source| WorkspaceError::ManifestRead {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let manifest: PackageManifest =
        toml::from_str(&content).map_err(|source| WorkspaceError::ManifestParse {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let name = manifest.name.ok_or_else(|| WorkspaceError::MissingField {
        path: manifest_path.to_path_buf(),
        field: "name",
    })?;

    let version = manifest.version.ok_or_else(|| WorkspaceError::MissingField {
        path: manifest_path.to_path_buf(),
        field: "version",
    })?;

    Ok(Package {
        name,
        version,
        path: dir.to_path_buf(),
        manifest_path: manifest_path.to_path_buf(),
        dependencies: into_dependency_map(manifest.dependencies),
        dev_dependencies: into_dependency_map(manifest.dev_dependencies),
    })
}
