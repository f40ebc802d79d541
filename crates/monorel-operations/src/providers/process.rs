use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::traits::{ProcessOutput, ProcessRunner};

/// Runs commands as blocking child processes with captured output.
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &[String], working_dir: &Path) -> io::Result<ProcessOutput> {
        let Some((program, args)) = command.split_first() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command"));
        };

        debug!(program, ?args, dir = %working_dir.display(), "spawning process");

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
