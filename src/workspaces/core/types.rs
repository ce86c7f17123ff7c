use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::WorkspaceCoreError;

/// Identifier of a workspace, assigned by the upstream workspace source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: String) -> Result<Self, WorkspaceCoreError> {
        if id.is_empty() {
            Err(WorkspaceCoreError::IdCannotBeEmpty)
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        // The `new` constructor is the validating way to create one; this impl
        // exists for literals in fixtures and tests.
        debug_assert!(!s.is_empty(), "WorkspaceId created from empty string via From<&str>");
        Self(s.to_string())
    }
}

/// Immutable display reference to an application linked into a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRef {
    pub id: String,
    pub name: String,
    /// Icon URL as served by the app registry.
    pub icon: String,
}

/// Aggregate value and performance figures shown on a workspace card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkspaceStats {
    pub total_value: f64,
    pub performance_24h: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_id_new_valid() {
        let id = WorkspaceId::new("ws-1".to_string()).unwrap();
        assert_eq!(id.as_str(), "ws-1");
    }

    #[test]
    fn workspace_id_new_empty_error() {
        let result = WorkspaceId::new("".to_string());
        assert!(matches!(result, Err(WorkspaceCoreError::IdCannotBeEmpty)));
    }

    #[test]
    fn workspace_id_display() {
        let id = WorkspaceId::from("display-id");
        assert_eq!(format!("{}", id), "display-id");
    }
}
