use std::path::Path;

use toml_edit::DocumentMut;

use crate::error::ManifestError;

/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, or
/// `ManifestError::Parse` if the TOML is malformed.
pub fn read_document(path: &Path) -> Result<DocumentMut, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    content
        .parse::<DocumentMut>()
        .map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads the top-level `version` string without interpreting it.
///
/// # Errors
///
/// Returns `ManifestError::MissingField` if `version` is absent or not a string.
pub fn read_version(path: &Path) -> Result<String, ManifestError> {
    let doc = read_document(path)?;

    doc.get("version")
        .and_then(toml_edit::Item::as_str)
        .map(str::to_string)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "version".to_string(),
        })
}
