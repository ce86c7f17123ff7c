use thiserror::Error;

use crate::workspaces::core::WorkspaceId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("Automation execution service rejected the request: {0}")]
    Rejected(String),

    #[error("Automation execution service unreachable: {0}")]
    Unreachable(String),

    #[error("Automation execution failed: {0}")]
    ExecutionFailed(String),
}

#[derive(Error, Debug)]
pub enum AutomationError {
    #[error("An automation run is already in flight for workspace '{0}'.")]
    AlreadyRunning(WorkspaceId),

    #[error("Automation run for workspace '{workspace_id}' failed: {source}")]
    ExecutionFailed {
        workspace_id: WorkspaceId,
        #[source]
        source: ExecutorError,
    },

    #[error("Automation run for workspace '{0}' timed out.")]
    Timeout(WorkspaceId),
}
