//! Domain layer for the Solspace wallet-connected workspace dashboard.
//!
//! This crate owns the dashboard's in-memory state and business rules:
//! the ordered workspace collection loaded once the wallet authenticates,
//! per-workspace automation runs with a non-overlap guarantee, and the
//! prompt suggestion panel with last-submission-wins semantics. External
//! collaborators (the workspace source, the automation execution service,
//! the prompt interpreter, and the wallet adapter) are injected behind
//! async traits so every service is independently testable.

pub mod automation;
pub mod config;
pub mod error;
pub mod session;
pub mod shared_types;
pub mod suggestions;
pub mod workspaces;

// Re-export common types and interfaces
pub use config::{ConfigError, DomainConfig};
pub use error::{DomainError, DomainResult};
pub use shared_types::WalletAddress;

pub use workspaces::{
    AppRef, DefaultWorkspaceStore, ProviderError, StaticWorkspaceProvider, Workspace,
    WorkspaceCoreError, WorkspaceEvent, WorkspaceId, WorkspaceSourceProvider, WorkspaceStats,
    WorkspaceStore, WorkspaceStoreError,
};
pub use automation::{
    AutomationError, AutomationEvent, AutomationExecutor, AutomationRunner, ExecutorError,
};
pub use suggestions::{
    ActionKind, AiAction, DefaultSuggestionService, InterpreterError, PromptInterpreter,
    SubmissionOutcome, SuggestionCoreError, SuggestionError, SuggestionEvent, SuggestionService,
};
pub use session::{
    DefaultWalletSessionService, SessionError, SessionEvent, WalletSession, WalletSessionService,
};
