mod changelog_writer;
mod interaction;
mod manifest_writer;
mod process_runner;
mod workspace_provider;

pub use changelog_writer::{ChangelogWriteResult, ChangelogWriter};
pub use interaction::{BumpSelection, InteractionProvider, PackageSelection};
pub use manifest_writer::ManifestWriter;
pub use process_runner::{ProcessOutput, ProcessRunner};
pub use workspace_provider::WorkspaceProvider;
