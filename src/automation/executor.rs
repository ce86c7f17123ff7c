use async_trait::async_trait;

use super::errors::ExecutorError;
use crate::workspaces::core::WorkspaceId;

/// External DeFi/automation execution service.
///
/// Treated as a black box returning success or failure after unspecified
/// latency; the runner only performs run-state bookkeeping around it.
#[async_trait]
pub trait AutomationExecutor: Send + Sync {
    async fn execute(&self, workspace_id: &WorkspaceId) -> Result<(), ExecutorError>;
}
