use thiserror::Error;

use crate::workspaces::store::WorkspaceStoreError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Workspace load triggered by session change failed: {0}")]
    WorkspaceLoad(#[from] WorkspaceStoreError),
}
