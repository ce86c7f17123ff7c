use serde::{Deserialize, Serialize};

use crate::workspaces::core::WorkspaceId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkspaceEvent {
    /// The collection was replaced wholesale by a successful load.
    WorkspacesLoaded { order: Vec<WorkspaceId> },
    /// A reorder changed the display order; carries the full new order.
    WorkspaceOrderChanged(Vec<WorkspaceId>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_event_order_changed_serde() {
        let event = WorkspaceEvent::WorkspaceOrderChanged(vec![
            WorkspaceId::from("1"),
            WorkspaceId::from("2"),
        ]);
        let serialized = serde_json::to_string(&event).unwrap();
        let deserialized: WorkspaceEvent = serde_json::from_str(&serialized).unwrap();
        assert_eq!(event, deserialized);
    }
}
