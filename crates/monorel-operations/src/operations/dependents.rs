use monorel_core::{DependencySection, Package};

/// A package that declares a dependency on the release target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentPackage {
    pub package: Package,
    /// The first section, in lookup order, naming the target.
    pub section: DependencySection,
}

/// Finds the direct dependents of `target` among `packages`.
///
/// `dependencies` is checked before `dev_dependencies` and a package is
/// recorded once, with the first section that names the target. The target
/// itself is skipped. Input order is preserved.
#[must_use]
pub fn find_dependents(packages: &[Package], target: &str) -> Vec<DependentPackage> {
    packages
        .iter()
        .filter(|package| package.name != target)
        .filter_map(|package| {
            DependencySection::SEARCH_ORDER
                .into_iter()
                .find(|section| package.declares(*section, target))
                .map(|section| DependentPackage {
                    package: package.clone(),
                    section,
                })
        })
        .collect()
}
