use std::path::Path;

use monorel_operations::operations::{ReleaseInput, ReleaseOperation, ReleaseOutcome};
use monorel_operations::providers::{
    FileSystemChangelogWriter, FileSystemManifestWriter, FileSystemWorkspaceProvider,
    SystemProcessRunner,
};

use super::PublishArgs;
use crate::error::{CliError, Result};
use crate::interaction::TerminalInteractionProvider;
use crate::output::{format_abort, format_report, format_summary};

pub(crate) fn run(args: PublishArgs, start_path: &Path) -> Result<()> {
    let operation = ReleaseOperation::new(
        FileSystemWorkspaceProvider::new(),
        TerminalInteractionProvider::new(),
        FileSystemManifestWriter::new(),
        FileSystemChangelogWriter::new(),
        SystemProcessRunner::new(),
    );
    let input = ReleaseInput::new(args.dry_run);

    let outcome = operation
        .execute(start_path, &input)
        .map_err(CliError::from_operation)?;

    match outcome {
        ReleaseOutcome::Aborted(reason) => print!("{}", format_abort(reason)),
        ReleaseOutcome::DryRun(plan) => print!("{}", format_summary(&plan)),
        ReleaseOutcome::Completed(report) => print!("{}", format_report(&report)),
    }

    Ok(())
}
