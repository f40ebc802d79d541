use std::io::BufRead;

use dialoguer::{Confirm, Input, Select};
use monorel_core::{ChangelogEntry, Package, VersionBump};
use monorel_operations::operations::ReleasePlan;
use monorel_operations::traits::{BumpSelection, InteractionProvider, PackageSelection};
use monorel_operations::{OperationError, Result};
use monorel_version::resolve_version;
use tracing::debug;

use crate::environment::non_interactive_reason;
use crate::output::format_summary;

const BUMP_CHOICES: [(&str, Option<VersionBump>); 4] = [
    ("patch", Some(VersionBump::Patch)),
    ("minor", Some(VersionBump::Minor)),
    ("major", Some(VersionBump::Major)),
    ("custom", None),
];

/// Prompts on the controlling terminal.
pub struct TerminalInteractionProvider;

impl TerminalInteractionProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ensure_interactive() -> Result<()> {
        match non_interactive_reason() {
            Some(reason) => {
                debug!(%reason, "refusing to prompt");
                Err(OperationError::InteractionRequired)
            }
            None => Ok(()),
        }
    }
}

impl Default for TerminalInteractionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionProvider for TerminalInteractionProvider {
    fn select_package(&self, available: &[Package]) -> Result<PackageSelection> {
        Self::ensure_interactive()?;

        let items: Vec<String> = available
            .iter()
            .map(|p| format!("{} ({})", p.name, p.version))
            .collect();

        let selection = Select::new()
            .with_prompt("Select the package to release")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(match selection {
            Some(index) => PackageSelection::Selected(available[index].clone()),
            None => PackageSelection::Cancelled,
        })
    }

    fn select_bump(&self, package: &Package) -> Result<BumpSelection> {
        let items: Vec<String> = BUMP_CHOICES
            .iter()
            .map(|(label, bump)| bump_label(&package.version, label, bump.as_ref()))
            .collect();

        let selection = Select::new()
            .with_prompt(format!("Select version bump for '{}'", package.name))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        let Some(index) = selection else {
            return Ok(BumpSelection::Cancelled);
        };

        match &BUMP_CHOICES[index].1 {
            Some(bump) => Ok(BumpSelection::Selected(bump.clone())),
            None => prompt_custom_version(&package.version),
        }
    }

    fn collect_changelog_entries(&self, package: &Package) -> Result<Vec<ChangelogEntry>> {
        println!();
        println!(
            "Enter changelog entries for '{}', one per line (empty line to finish):",
            package.name
        );

        read_entries(std::io::stdin().lock())
    }

    fn confirm_release(&self, plan: &ReleasePlan) -> Result<bool> {
        println!();
        print!("{}", format_summary(plan));
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Apply these changes?")
            .default(false)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(confirmed.unwrap_or(false))
    }

    fn confirm_publish(&self, package: &Package, default: bool) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(format!("Publish '{}'?", package.name))
            .default(default)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(confirmed.unwrap_or(false))
    }
}

fn bump_label(current: &str, label: &str, bump: Option<&VersionBump>) -> String {
    match bump.map(|bump| resolve_version(current, bump)) {
        Some(Ok(next)) => format!("{label} ({current} -> {next})"),
        Some(Err(_)) => label.to_string(),
        None => format!("{label} (enter a version)"),
    }
}

fn prompt_custom_version(current: &str) -> Result<BumpSelection> {
    let version: String = Input::new()
        .with_prompt(format!("New version (currently {current})"))
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("version must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(dialoguer_to_operation_error)?;

    Ok(BumpSelection::Selected(VersionBump::custom(version)?))
}

/// Reads one entry per line until a blank line or end of input.
fn read_entries(mut input: impl BufRead) -> Result<Vec<ChangelogEntry>> {
    let mut entries = Vec::new();

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        entries.push(ChangelogEntry::new(trimmed)?);
    }

    Ok(entries)
}

fn dialoguer_to_operation_error(e: dialoguer::Error) -> OperationError {
    match e {
        dialoguer::Error::IO(io_err) => OperationError::Io(io_err),
    }
}
