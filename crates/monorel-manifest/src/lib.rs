mod document;
mod error;
mod reader;
mod writer;

pub use document::ManifestDocument;
pub use error::ManifestError;
pub use writer::{DependencyWrite, update_dependency, verify_version, write_version};
