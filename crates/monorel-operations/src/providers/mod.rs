mod changelog;
mod manifest;
mod process;
mod workspace;

pub use changelog::FileSystemChangelogWriter;
pub use manifest::FileSystemManifestWriter;
pub use process::SystemProcessRunner;
pub use workspace::FileSystemWorkspaceProvider;
