use monorel_operations::operations::ReleasePlan;

pub(crate) fn format_summary(plan: &ReleasePlan) -> String {
    let mut output = String::new();

    if plan.dry_run {
        output.push_str("Dry run - no changes will be made.\n\n");
    }

    output.push_str("Release summary:\n");
    output.push_str(&format!("  package:   {}\n", plan.package.name));
    output.push_str(&format!(
        "  version:   {} -> {} ({})\n",
        plan.current_version(),
        plan.new_version,
        plan.bump
    ));
    output.push_str(&format!(
        "  changelog: {}\n\n",
        plan.changelog_path.display()
    ));

    for line in plan.release_block.lines() {
        output.push_str(&format!("    {line}\n"));
    }
    output.push('\n');

    if plan.dependents.is_empty() {
        output.push_str("No dependent packages to update.\n");
        return output;
    }

    output.push_str(&format!(
        "Dependent packages to update to {}:\n",
        plan.dependency_requirement()
    ));
    for dependent in &plan.dependents {
        output.push_str(&format!(
            "  {} ({})\n",
            dependent.package.name, dependent.section
        ));
    }

    output
}
