use thiserror::Error;

use crate::workspaces::core::{WorkspaceCoreError, WorkspaceId};
use crate::workspaces::provider::ProviderError;

#[derive(Error, Debug)]
pub enum WorkspaceStoreError {
    #[error("Failed to load workspaces from the upstream source: {source}")]
    LoadFailed {
        #[source]
        source: ProviderError,
    },

    #[error("Workspace source returned duplicate workspace ID '{0}'.")]
    DuplicateWorkspaceId(WorkspaceId),

    #[error("Workspace index {index} is out of range for {len} workspaces.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Workspace with ID '{0}' not found.")]
    WorkspaceNotFound(WorkspaceId),

    #[error("Workspace core error: {0}")]
    CoreError(#[from] WorkspaceCoreError),
}
