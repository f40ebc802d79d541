use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] monorel_core::CoreError),

    #[error(transparent)]
    Workspace(#[from] monorel_workspace::WorkspaceError),

    #[error(transparent)]
    Manifest(#[from] monorel_manifest::ManifestError),

    #[error(transparent)]
    Changelog(#[from] monorel_changelog::ChangelogError),

    #[error("cannot compute next version of '{package}'")]
    VersionResolution {
        package: String,
        #[source]
        source: monorel_version::VersionError,
    },

    #[error("failed to update version of '{package}'; no other files were changed")]
    OwnVersionUpdate {
        package: String,
        #[source]
        source: Box<OperationError>,
    },

    #[error(
        "failed to write changelog of '{package}'; its manifest already carries version {version}"
    )]
    ChangelogWrite {
        package: String,
        version: String,
        #[source]
        source: Box<OperationError>,
    },

    #[error("interaction required but provider is not interactive")]
    InteractionRequired,

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OperationError>;

/// A dependent package that could not be pointed at the new version.
#[derive(Debug, Error)]
pub enum DependencyUpdateError {
    #[error("'{dependency}' is declared in neither dependencies nor dev_dependencies")]
    NotDeclared { dependency: String },

    #[error("failed to edit manifest")]
    Manifest(#[source] Box<OperationError>),
}

/// A publish invocation that did not succeed.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {output}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn own_version_error_names_package() {
        let err = OperationError::OwnVersionUpdate {
            package: "core".to_string(),
            source: Box::new(
                monorel_manifest::ManifestError::MissingField {
                    path: PathBuf::from("/ws/packages/core/package.toml"),
                    field: "version".to_string(),
                }
                .into(),
            ),
        };

        assert!(err.to_string().contains("'core'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn changelog_error_mentions_applied_version() {
        let err = OperationError::ChangelogWrite {
            package: "core".to_string(),
            version: "1.2.4".to_string(),
            source: Box::new(
                monorel_changelog::ChangelogError::Write {
                    path: PathBuf::from("/ws/packages/core/CHANGELOG.md"),
                    source: std::io::Error::other("disk full"),
                }
                .into(),
            ),
        };

        assert!(err.to_string().contains("1.2.4"));
    }

    #[test]
    fn workspace_error_is_transparent() {
        let err: OperationError = monorel_workspace::WorkspaceError::PackagesDirNotFound {
            path: PathBuf::from("/ws/packages"),
        }
        .into();

        assert!(err.to_string().contains("/ws/packages"));
    }

    #[test]
    fn not_declared_names_dependency() {
        let err = DependencyUpdateError::NotDeclared {
            dependency: "core".to_string(),
        };

        assert!(err.to_string().contains("'core'"));
    }

    #[test]
    fn publish_failure_includes_captured_output() {
        let err = PublishError::Failed {
            command: "cargo publish".to_string(),
            status: "exit code 101".to_string(),
            output: "registry rejected upload".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("exit code 101"));
        assert!(msg.contains("registry rejected upload"));
    }
}
