mod config;
mod error;
mod manifest;
mod workspace;

pub const CONFIG_FILE_NAME: &str = "monorel.toml";

pub use config::{WorkspaceConfig, load_config, parse_config};
pub use error::WorkspaceError;
pub use workspace::{Workspace, discover_packages, discover_workspace, find_workspace_root};

pub type Result<T> = std::result::Result<T, WorkspaceError>;
