use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("custom version cannot be empty")]
    EmptyCustomVersion,

    #[error("changelog entry cannot be empty")]
    EmptyChangelogEntry,
}

pub type Result<T> = std::result::Result<T, CoreError>;
