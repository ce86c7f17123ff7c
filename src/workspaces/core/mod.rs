pub mod errors;
pub mod types;
pub mod workspace;

pub use errors::{WorkspaceCoreError, MAX_WORKSPACE_NAME_LENGTH};
pub use types::{AppRef, WorkspaceId, WorkspaceStats};
pub use workspace::Workspace;
