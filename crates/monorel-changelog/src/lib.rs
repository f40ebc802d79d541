mod changelog;
mod error;
mod format;

pub use changelog::Changelog;
pub use error::ChangelogError;
pub use format::{CHANGELOG_TITLE, format_release_block, format_version_header, merge_release};

pub type Result<T> = std::result::Result<T, ChangelogError>;
