use std::path::Path;

use monorel_core::DependencySection;

use crate::document::{ManifestDocument, field_name};
use crate::error::ManifestError;

/// Where a dependency requirement was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyWrite {
    pub section: DependencySection,
    pub field: String,
}

/// # Errors
///
/// Returns an error if the manifest cannot be read, parsed, or written, or if
/// it has no `version` field to update.
pub fn write_version(path: &Path, version: &str) -> Result<(), ManifestError> {
    let mut manifest = ManifestDocument::open(path)?;

    if !manifest.contains(&["version"]) {
        return Err(ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "version".to_string(),
        });
    }

    manifest.set_field(&["version"], version)?;
    manifest.save()
}

/// # Errors
///
/// Returns `ManifestError::VerificationFailed` if the version in the manifest
/// does not match the expected version.
pub fn verify_version(path: &Path, expected: &str) -> Result<(), ManifestError> {
    let actual = crate::reader::read_version(path)?;

    if actual != expected {
        return Err(ManifestError::VerificationFailed {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}

/// Points an existing dependency entry at a new requirement.
///
/// `dependencies` is searched before `dev_dependencies` and only the first
/// section containing the dependency is edited. Table entries keep their other
/// keys and only receive a new `version`. Returns `Ok(None)` without touching
/// the file when neither section declares the dependency.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, parsed, or written.
pub fn update_dependency(
    path: &Path,
    dependency_name: &str,
    requirement: &str,
) -> Result<Option<DependencyWrite>, ManifestError> {
    let mut manifest = ManifestDocument::open(path)?;

    let Some(section) = find_dependency_section(&manifest, dependency_name) else {
        return Ok(None);
    };

    let entry = [section.key(), dependency_name];
    let mut keys = entry.to_vec();
    if manifest.is_table_like(&entry) {
        keys.push("version");
    }

    manifest.set_field(&keys, requirement)?;
    manifest.save()?;

    Ok(Some(DependencyWrite {
        section,
        field: field_name(&keys),
    }))
}

fn find_dependency_section(
    manifest: &ManifestDocument,
    dependency_name: &str,
) -> Option<DependencySection> {
    DependencySection::SEARCH_ORDER
        .into_iter()
        .find(|section| manifest.contains(&[section.key(), dependency_name]))
}
