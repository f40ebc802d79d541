use indexmap::IndexMap;
use monorel_core::DependencyMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, DependencyValue>,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, DependencyValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DependencyValue {
    Requirement(String),
    Detailed(DetailedDependency),
}

#[derive(Debug, Deserialize)]
pub struct DetailedDependency {
    pub version: Option<String>,
}

impl DependencyValue {
    /// Requirement string; `*` for table entries without a version.
    fn requirement(&self) -> &str {
        match self {
            Self::Requirement(requirement) => requirement,
            Self::Detailed(detailed) => detailed.version.as_deref().unwrap_or("*"),
        }
    }
}

pub fn into_dependency_map(raw: IndexMap<String, DependencyValue>) -> DependencyMap {
    raw.into_iter()
        .map(|(name, value)| {
            let requirement = value.requirement().to_string();
            (name, requirement)
        })
        .collect()
}
