use serde::{Deserialize, Serialize};

use crate::workspaces::core::WorkspaceId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AutomationEvent {
    RunStarted { workspace_id: WorkspaceId },
    RunCompleted { workspace_id: WorkspaceId },
    RunFailed { workspace_id: WorkspaceId, reason: String },
}
