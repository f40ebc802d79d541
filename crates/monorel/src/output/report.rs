use monorel_operations::operations::{
    AbortReason, DependencyUpdateOutcome, PublishOutcome, ReleaseReport,
};

use super::error_chain;

pub(crate) fn format_abort(reason: AbortReason) -> String {
    format!("Aborted: {reason}.\n")
}

pub(crate) fn format_report(report: &ReleaseReport) -> String {
    let mut output = String::new();
    let plan = &report.plan;

    output.push_str(&format!(
        "Released {} {} -> {}\n",
        plan.package.name,
        plan.current_version(),
        plan.new_version
    ));

    let action = if report.changelog.created {
        "created"
    } else {
        "updated"
    };
    output.push_str(&format!(
        "  changelog {action}: {}\n",
        report.changelog.path.display()
    ));

    for update in &report.dependency_updates {
        match update {
            DependencyUpdateOutcome::Updated { package, write } => {
                output.push_str(&format!("  updated {} ({})\n", package.name, write.field));
            }
            DependencyUpdateOutcome::Failed { package, error } => {
                output.push_str(&format!(
                    "  failed to update {}: {}\n",
                    package.name,
                    error_chain(error)
                ));
            }
        }
    }

    for result in &report.publish_results {
        match result {
            PublishOutcome::Published { package } => {
                output.push_str(&format!("  published {package}\n"));
            }
            PublishOutcome::Failed { package, error } => {
                output.push_str(&format!(
                    "  failed to publish {package}: {}\n",
                    error_chain(error)
                ));
            }
        }
    }

    if report.has_failures() {
        output.push_str("warning: some steps failed; completed edits remain on disk\n");
    }

    output
}
