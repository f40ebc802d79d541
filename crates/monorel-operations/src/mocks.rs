use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use monorel_core::{ChangelogEntry, DependencyMap, DependencySection, Package, VersionBump};
use monorel_manifest::{DependencyWrite, ManifestError};
use monorel_workspace::{Workspace, WorkspaceConfig, WorkspaceError};

use crate::Result;
use crate::error::OperationError;
use crate::operations::ReleasePlan;
use crate::traits::{
    BumpSelection, ChangelogWriteResult, ChangelogWriter, InteractionProvider, ManifestWriter,
    PackageSelection, ProcessOutput, ProcessRunner, WorkspaceProvider,
};

const MOCK_ROOT: &str = "/ws";

/// Builds a package under `/ws/packages/<name>` whose dependencies all
/// carry the requirement `^1.0.0`.
#[must_use]
pub fn make_package(
    name: &str,
    version: &str,
    dependencies: &[&str],
    dev_dependencies: &[&str],
) -> Package {
    let path = PathBuf::from(MOCK_ROOT).join("packages").join(name);
    let to_map = |names: &[&str]| -> DependencyMap {
        names
            .iter()
            .map(|dep| ((*dep).to_string(), "^1.0.0".to_string()))
            .collect()
    };

    Package {
        name: name.to_string(),
        version: version.to_string(),
        manifest_path: path.join("package.toml"),
        path,
        dependencies: to_map(dependencies),
        dev_dependencies: to_map(dev_dependencies),
    }
}

#[must_use]
pub fn make_workspace(packages: Vec<Package>) -> Workspace {
    Workspace {
        root: PathBuf::from(MOCK_ROOT),
        config: WorkspaceConfig::default(),
        packages,
    }
}

pub struct MockWorkspaceProvider {
    workspace: Option<Workspace>,
}

impl MockWorkspaceProvider {
    #[must_use]
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: Some(workspace),
        }
    }

    /// A provider whose discovery fails as if `packages/` were absent.
    #[must_use]
    pub fn missing_packages_dir() -> Self {
        Self { workspace: None }
    }
}

impl WorkspaceProvider for MockWorkspaceProvider {
    fn discover_workspace(&self, _start_path: &Path) -> Result<Workspace> {
        self.workspace.clone().ok_or_else(|| {
            WorkspaceError::PackagesDirNotFound {
                path: PathBuf::from(MOCK_ROOT).join("packages"),
            }
            .into()
        })
    }
}

/// Scripted answers for every prompt, with a record of what was asked.
pub struct MockInteractionProvider {
    package: Option<String>,
    bump: Option<VersionBump>,
    entries: Vec<String>,
    confirm_release: bool,
    publish_answers: Mutex<VecDeque<bool>>,
    publish_prompts: Mutex<Vec<(String, bool)>>,
    release_confirmations: Mutex<usize>,
    entries_requested: Mutex<bool>,
}

impl MockInteractionProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            package: None,
            bump: None,
            entries: Vec::new(),
            confirm_release: false,
            publish_answers: Mutex::new(VecDeque::new()),
            publish_prompts: Mutex::new(Vec::new()),
            release_confirmations: Mutex::new(0),
            entries_requested: Mutex::new(false),
        }
    }

    #[must_use]
    pub fn with_package(mut self, name: &str) -> Self {
        self.package = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_bump(mut self, bump: VersionBump) -> Self {
        self.bump = Some(bump);
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: &[&str]) -> Self {
        self.entries = entries.iter().map(|entry| (*entry).to_string()).collect();
        self
    }

    #[must_use]
    pub fn confirming(mut self, confirm: bool) -> Self {
        self.confirm_release = confirm;
        self
    }

    /// Answers for publish prompts, in order. Exhausted answers decline.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_publish_answers(self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.publish_answers
            .lock()
            .expect("lock poisoned")
            .extend(answers);
        self
    }

    /// Package names and defaults of every publish prompt shown.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn publish_prompts(&self) -> Vec<(String, bool)> {
        self.publish_prompts.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn release_confirmations(&self) -> usize {
        *self.release_confirmations.lock().expect("lock poisoned")
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn entries_requested(&self) -> bool {
        *self.entries_requested.lock().expect("lock poisoned")
    }
}

impl Default for MockInteractionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionProvider for MockInteractionProvider {
    fn select_package(&self, available: &[Package]) -> Result<PackageSelection> {
        let selected = self
            .package
            .as_ref()
            .and_then(|name| available.iter().find(|p| &p.name == name));

        Ok(selected.map_or(PackageSelection::Cancelled, |package| {
            PackageSelection::Selected(package.clone())
        }))
    }

    fn select_bump(&self, _package: &Package) -> Result<BumpSelection> {
        Ok(self
            .bump
            .clone()
            .map_or(BumpSelection::Cancelled, BumpSelection::Selected))
    }

    fn collect_changelog_entries(&self, _package: &Package) -> Result<Vec<ChangelogEntry>> {
        *self.entries_requested.lock().expect("lock poisoned") = true;
        self.entries
            .iter()
            .map(|entry| ChangelogEntry::new(entry.as_str()).map_err(OperationError::from))
            .collect()
    }

    fn confirm_release(&self, _plan: &ReleasePlan) -> Result<bool> {
        *self.release_confirmations.lock().expect("lock poisoned") += 1;
        Ok(self.confirm_release)
    }

    fn confirm_publish(&self, package: &Package, default: bool) -> Result<bool> {
        self.publish_prompts
            .lock()
            .expect("lock poisoned")
            .push((package.name.clone(), default));
        Ok(self
            .publish_answers
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or(false))
    }
}

/// In-memory manifests keyed by path, seeded from package snapshots.
pub struct MockManifestWriter {
    manifests: HashMap<PathBuf, Package>,
    versions: Mutex<HashMap<PathBuf, String>>,
    version_writes: Mutex<Vec<(PathBuf, String)>>,
    dependency_writes: Mutex<Vec<(PathBuf, String, String)>>,
    undeclared: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
    fail_version_write: bool,
    mismatch_verification: bool,
}

impl MockManifestWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            manifests: HashMap::new(),
            versions: Mutex::new(HashMap::new()),
            version_writes: Mutex::new(Vec::new()),
            dependency_writes: Mutex::new(Vec::new()),
            undeclared: HashSet::new(),
            failing: HashSet::new(),
            fail_version_write: false,
            mismatch_verification: false,
        }
    }

    #[must_use]
    pub fn with_packages(mut self, packages: &[Package]) -> Self {
        for package in packages {
            self.manifests
                .insert(package.manifest_path.clone(), package.clone());
        }
        self
    }

    /// The on-disk manifest of `name` no longer declares any dependency.
    #[must_use]
    pub fn with_undeclared_on_disk(mut self, name: &str) -> Self {
        self.undeclared.insert(Self::manifest_path(name));
        self
    }

    /// Dependency edits to the manifest of `name` fail with a write error.
    #[must_use]
    pub fn with_failing_manifest(mut self, name: &str) -> Self {
        self.failing.insert(Self::manifest_path(name));
        self
    }

    #[must_use]
    pub fn failing_version_write(mut self) -> Self {
        self.fail_version_write = true;
        self
    }

    #[must_use]
    pub fn mismatching_verification(mut self) -> Self {
        self.mismatch_verification = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn version_writes(&self) -> Vec<(PathBuf, String)> {
        self.version_writes.lock().expect("lock poisoned").clone()
    }

    /// `(manifest path, dependency name, requirement)` for each edit.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn dependency_writes(&self) -> Vec<(PathBuf, String, String)> {
        self.dependency_writes.lock().expect("lock poisoned").clone()
    }

    fn manifest_path(name: &str) -> PathBuf {
        make_package(name, "0.0.0", &[], &[]).manifest_path
    }

    fn write_error(path: &Path) -> OperationError {
        ManifestError::Write {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
        .into()
    }
}

impl Default for MockManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for MockManifestWriter {
    fn write_version(&self, manifest_path: &Path, new_version: &str) -> Result<()> {
        if self.fail_version_write {
            return Err(Self::write_error(manifest_path));
        }

        self.version_writes
            .lock()
            .expect("lock poisoned")
            .push((manifest_path.to_path_buf(), new_version.to_string()));
        self.versions
            .lock()
            .expect("lock poisoned")
            .insert(manifest_path.to_path_buf(), new_version.to_string());
        Ok(())
    }

    fn verify_version(&self, manifest_path: &Path, expected: &str) -> Result<()> {
        let actual = self
            .versions
            .lock()
            .expect("lock poisoned")
            .get(manifest_path)
            .cloned()
            .unwrap_or_default();

        if self.mismatch_verification || actual != expected {
            return Err(ManifestError::VerificationFailed {
                path: manifest_path.to_path_buf(),
                expected: expected.to_string(),
                actual,
            }
            .into());
        }
        Ok(())
    }

    fn update_dependency(
        &self,
        manifest_path: &Path,
        dependency_name: &str,
        requirement: &str,
    ) -> Result<Option<DependencyWrite>> {
        if self.failing.contains(manifest_path) {
            return Err(Self::write_error(manifest_path));
        }
        if self.undeclared.contains(manifest_path) {
            return Ok(None);
        }

        let Some(section) = self.manifests.get(manifest_path).and_then(|package| {
            DependencySection::SEARCH_ORDER
                .into_iter()
                .find(|section| package.declares(*section, dependency_name))
        }) else {
            return Ok(None);
        };

        self.dependency_writes
            .lock()
            .expect("lock poisoned")
            .push((
                manifest_path.to_path_buf(),
                dependency_name.to_string(),
                requirement.to_string(),
            ));

        Ok(Some(DependencyWrite {
            section,
            field: format!("{}.{dependency_name}", section.key()),
        }))
    }
}

pub struct MockChangelogWriter {
    writes: Mutex<Vec<(PathBuf, String)>>,
    failing: bool,
}

impl MockChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// `(changelog path, release block)` for each write.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn write_release(&self, changelog_path: &Path, block: &str) -> Result<ChangelogWriteResult> {
        if self.failing {
            return Err(monorel_changelog::ChangelogError::Write {
                path: changelog_path.to_path_buf(),
                source: io::Error::other("disk full"),
            }
            .into());
        }

        self.writes
            .lock()
            .expect("lock poisoned")
            .push((changelog_path.to_path_buf(), block.to_string()));

        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created: false,
        })
    }
}

/// Records every command; succeeds unless a failure is scripted for the
/// working directory.
pub struct MockProcessRunner {
    calls: Mutex<Vec<(Vec<String>, PathBuf)>>,
    failures: HashMap<PathBuf, ProcessOutput>,
    unspawnable: HashSet<PathBuf>,
}

impl MockProcessRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: HashMap::new(),
            unspawnable: HashSet::new(),
        }
    }

    #[must_use]
    pub fn failing_in(mut self, dir: &str, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.failures.insert(
            PathBuf::from(dir),
            ProcessOutput {
                exit_code: Some(exit_code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    #[must_use]
    pub fn unspawnable_in(mut self, dir: &str) -> Self {
        self.unspawnable.insert(PathBuf::from(dir));
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<(Vec<String>, PathBuf)> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(&self, command: &[String], working_dir: &Path) -> io::Result<ProcessOutput> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((command.to_vec(), working_dir.to_path_buf()));

        if self.unspawnable.contains(working_dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
        }

        Ok(self
            .failures
            .get(working_dir)
            .cloned()
            .unwrap_or(ProcessOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }))
    }
}
