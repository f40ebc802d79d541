use std::path::Path;

use monorel_workspace::Workspace;

use crate::Result;

pub trait WorkspaceProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the workspace cannot be located or its packages
    /// cannot be discovered.
    fn discover_workspace(&self, start_path: &Path) -> Result<Workspace>;
}
