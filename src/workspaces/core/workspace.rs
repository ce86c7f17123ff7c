use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{WorkspaceCoreError, MAX_WORKSPACE_NAME_LENGTH};
use super::types::{AppRef, WorkspaceId, WorkspaceStats};

/// A named, ordered collection of linked application references representing
/// a user's automation context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    description: String,
    apps: Vec<AppRef>,
    stats: WorkspaceStats,
    automations: u32,
    last_active: DateTime<Utc>,
}

impl Workspace {
    pub fn new(
        id: WorkspaceId,
        name: String,
        description: String,
        apps: Vec<AppRef>,
        stats: WorkspaceStats,
        automations: u32,
        last_active: DateTime<Utc>,
    ) -> Result<Self, WorkspaceCoreError> {
        if name.is_empty() {
            return Err(WorkspaceCoreError::NameCannotBeEmpty);
        }
        if name.len() > MAX_WORKSPACE_NAME_LENGTH {
            return Err(WorkspaceCoreError::NameTooLong {
                name: name.clone(),
                max_len: MAX_WORKSPACE_NAME_LENGTH,
                actual_len: name.len(),
            });
        }

        Ok(Self {
            id,
            name,
            description,
            apps,
            stats,
            automations,
            last_active,
        })
    }

    // Getters
    pub fn id(&self) -> &WorkspaceId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn apps(&self) -> &[AppRef] {
        &self.apps
    }
    pub fn stats(&self) -> WorkspaceStats {
        self.stats
    }
    pub fn automations(&self) -> u32 {
        self.automations
    }
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    // Setters & Methods
    pub fn rename(&mut self, new_name: String) -> Result<(), WorkspaceCoreError> {
        if new_name.is_empty() {
            return Err(WorkspaceCoreError::NameCannotBeEmpty);
        }
        if new_name.len() > MAX_WORKSPACE_NAME_LENGTH {
            return Err(WorkspaceCoreError::NameTooLong {
                name: new_name.clone(),
                max_len: MAX_WORKSPACE_NAME_LENGTH,
                actual_len: new_name.len(),
            });
        }
        self.name = new_name;
        Ok(())
    }

    /// Records activity on the workspace, bumping `last_active` to now.
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workspace(name: &str) -> Result<Workspace, WorkspaceCoreError> {
        Workspace::new(
            WorkspaceId::from("ws-1"),
            name.to_string(),
            "Automated trading workspace".to_string(),
            vec![AppRef {
                id: "jupiter".to_string(),
                name: "Jupiter".to_string(),
                icon: "https://apps.example/jupiter.svg".to_string(),
            }],
            WorkspaceStats {
                total_value: 12450.0,
                performance_24h: 2.3,
            },
            3,
            Utc::now(),
        )
    }

    #[test]
    fn workspace_new_valid() {
        let ws = sample_workspace("DeFi Trading").unwrap();
        assert_eq!(ws.name(), "DeFi Trading");
        assert_eq!(ws.id().as_str(), "ws-1");
        assert_eq!(ws.apps().len(), 1);
        assert_eq!(ws.automations(), 3);
    }

    #[test]
    fn workspace_new_name_empty() {
        let result = sample_workspace("");
        assert!(matches!(result, Err(WorkspaceCoreError::NameCannotBeEmpty)));
    }

    #[test]
    fn workspace_new_name_too_long() {
        let long_name = "a".repeat(MAX_WORKSPACE_NAME_LENGTH + 1);
        let result = sample_workspace(&long_name);
        assert!(matches!(result, Err(WorkspaceCoreError::NameTooLong { name, .. }) if name == long_name));
    }

    #[test]
    fn workspace_rename_valid() {
        let mut ws = sample_workspace("Old Name").unwrap();
        ws.rename("New Name".to_string()).unwrap();
        assert_eq!(ws.name(), "New Name");
    }

    #[test]
    fn workspace_rename_invalid() {
        let mut ws = sample_workspace("Old Name").unwrap();
        let result = ws.rename("".to_string());
        assert!(matches!(result, Err(WorkspaceCoreError::NameCannotBeEmpty)));
        assert_eq!(ws.name(), "Old Name"); // Name should not have changed
    }

    #[test]
    fn workspace_touch_advances_last_active() {
        let mut ws = sample_workspace("Touch").unwrap();
        let before = ws.last_active();
        ws.touch();
        assert!(ws.last_active() >= before);
    }

    #[test]
    fn workspace_serde() {
        let ws = sample_workspace("Serde Test").unwrap();
        let serialized = serde_json::to_string(&ws).unwrap();
        let deserialized: Workspace = serde_json::from_str(&serialized).unwrap();
        assert_eq!(ws, deserialized);
    }
}
