use monorel_core::Package;
use tracing::{info, warn};

use super::apply::DependencyUpdateOutcome;
use super::plan::ReleasePlan;
use crate::Result;
use crate::error::PublishError;
use crate::traits::{InteractionProvider, ProcessRunner};

#[derive(Debug)]
pub enum PublishOutcome {
    Published { package: String },
    Failed { package: String, error: PublishError },
}

impl PublishOutcome {
    #[must_use]
    pub fn package(&self) -> &str {
        match self {
            Self::Published { package } | Self::Failed { package, .. } => package,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Drives the optional publish step after edits are applied.
pub struct Publisher<'a, I, R> {
    interaction: &'a I,
    runner: &'a R,
    command: &'a [String],
}

impl<'a, I, R> Publisher<'a, I, R>
where
    I: InteractionProvider,
    R: ProcessRunner,
{
    pub fn new(interaction: &'a I, runner: &'a R, command: &'a [String]) -> Self {
        Self {
            interaction,
            runner,
            command,
        }
    }

    /// Asks which packages to publish, then publishes them in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if an interaction fails. Publish failures are
    /// reported in the returned outcomes.
    pub fn run(
        &self,
        plan: &ReleasePlan,
        dependency_updates: &[DependencyUpdateOutcome],
    ) -> Result<Vec<PublishOutcome>> {
        let selected = self.select_packages(plan, dependency_updates)?;

        Ok(selected
            .into_iter()
            .map(|package| self.publish(package))
            .collect())
    }

    /// The released package is offered with a default of yes; each
    /// successfully updated dependent with a default of no.
    ///
    /// # Errors
    ///
    /// Returns an error if an interaction fails.
    pub fn select_packages<'p>(
        &self,
        plan: &'p ReleasePlan,
        dependency_updates: &'p [DependencyUpdateOutcome],
    ) -> Result<Vec<&'p Package>> {
        let mut selected = Vec::new();

        if self.interaction.confirm_publish(&plan.package, true)? {
            selected.push(&plan.package);
        }

        for update in dependency_updates {
            let DependencyUpdateOutcome::Updated { package, .. } = update else {
                continue;
            };
            if self.interaction.confirm_publish(package, false)? {
                selected.push(package);
            }
        }

        Ok(selected)
    }

    #[must_use]
    pub fn publish(&self, package: &Package) -> PublishOutcome {
        let command_line = self.command.join(" ");
        info!(package = %package.name, command = %command_line, "publishing");

        let result = match self.runner.run(self.command, &package.path) {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => Err(PublishError::Failed {
                command: command_line,
                status: output
                    .exit_code
                    .map_or_else(|| "a signal".to_string(), |code| format!("exit code {code}")),
                output: output.diagnostics().to_string(),
            }),
            Err(source) => Err(PublishError::Spawn {
                command: command_line,
                source,
            }),
        };

        let package = package.name.clone();
        match result {
            Ok(()) => PublishOutcome::Published { package },
            Err(error) => {
                warn!(package = %package, %error, "publish failed");
                PublishOutcome::Failed { package, error }
            }
        }
    }
}
