//! Workspace collection management: the ordered workspace set loaded from an
//! upstream source and reordered by the dashboard's drag-and-drop.

pub mod core;
pub mod provider;
pub mod store;

pub use self::core::{AppRef, Workspace, WorkspaceCoreError, WorkspaceId, WorkspaceStats};
pub use provider::{ProviderError, StaticWorkspaceProvider, WorkspaceSourceProvider};
pub use store::{DefaultWorkspaceStore, WorkspaceEvent, WorkspaceStore, WorkspaceStoreError};
