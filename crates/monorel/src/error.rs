use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("release failed")]
    Operation(#[source] monorel_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("interactive mode requires a terminal")]
    NotATty,
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Maps a missing terminal reported by the workflow to `NotATty`.
    #[must_use]
    pub fn from_operation(error: monorel_operations::OperationError) -> Self {
        use monorel_operations::OperationError;

        match error {
            OperationError::InteractionRequired => Self::NotATty,
            other => Self::Operation(other),
        }
    }
}
