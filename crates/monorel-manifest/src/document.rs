use std::fmt;
use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, Item, Value};

use crate::error::ManifestError;
use crate::reader::read_document;

/// A manifest loaded for editing.
///
/// Fields are addressed by key segments such as `["dependencies", "core"]`,
/// so keys containing dots are never split. Setting a field only touches that
/// value; comments, ordering, and whitespace elsewhere in the document are
/// kept as they were read.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    doc: DocumentMut,
}

impl ManifestDocument {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn open(path: &Path) -> Result<Self, ManifestError> {
        Ok(Self {
            path: path.to_path_buf(),
            doc: read_document(path)?,
        })
    }

    #[must_use]
    pub fn get(&self, keys: &[&str]) -> Option<&Item> {
        keys.iter()
            .try_fold(self.doc.as_item(), |current, key| current.get(key))
    }

    #[must_use]
    pub fn contains(&self, keys: &[&str]) -> bool {
        self.get(keys).is_some()
    }

    #[must_use]
    pub fn is_table_like(&self, keys: &[&str]) -> bool {
        self.get(keys).is_some_and(Item::is_table_like)
    }

    /// Sets the string value at `keys`, creating the final key if needed.
    ///
    /// An existing value keeps its surrounding whitespace and trailing comment.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::MissingField` if a parent table does not exist, or
    /// `ManifestError::NotATable` if a parent is a plain value.
    pub fn set_field(&mut self, keys: &[&str], value: &str) -> Result<(), ManifestError> {
        let Some((key, parent_keys)) = keys.split_last() else {
            return Err(ManifestError::MissingField {
                path: self.path.clone(),
                field: String::new(),
            });
        };

        let parent = parent_keys
            .iter()
            .try_fold(self.doc.as_item_mut(), |current, key| current.get_mut(key))
            .ok_or_else(|| ManifestError::MissingField {
                path: self.path.clone(),
                field: field_name(parent_keys),
            })?;

        let table = parent
            .as_table_like_mut()
            .ok_or_else(|| ManifestError::NotATable {
                path: self.path.clone(),
                field: field_name(parent_keys),
            })?;

        match table.get_mut(key) {
            Some(existing) => replace_value(existing, value),
            None => {
                table.insert(key, toml_edit::value(value));
            }
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ManifestError::Write` if the file cannot be written.
    pub fn save(&self) -> Result<(), ManifestError> {
        std::fs::write(&self.path, self.doc.to_string()).map_err(|source| ManifestError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl fmt::Display for ManifestDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc)
    }
}

/// Renders key segments as a TOML dotted key, quoting segments that are not
/// bare keys.
#[must_use]
pub fn field_name(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| {
            let bare = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if bare {
                (*key).to_string()
            } else {
                format!("\"{}\"", key.replace('\\', "\\\\").replace('"', "\\\""))
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn replace_value(item: &mut Item, value: &str) {
    let mut new_value = Value::from(value);
    if let Some(existing) = item.as_value() {
        *new_value.decor_mut() = existing.decor().clone();
    }
    *item = Item::Value(new_value);
}
