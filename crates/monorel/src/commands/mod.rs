mod publish;

use std::path::Path;

use clap::{Args, Subcommand};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Bump a package, record its changelog, update dependents, and publish
    Publish(PublishArgs),
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Show the release summary without changing any files
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Publish(args) => publish::run(args, start_path),
        }
    }
}
