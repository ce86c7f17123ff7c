//! Error module for the Solspace domain layer.
//!
//! Aggregates the per-module error types. No error here is globally fatal:
//! each is scoped to the single operation that raised it and leaves the
//! stores' state intact.

use thiserror::Error;

use crate::automation::AutomationError;
use crate::config::ConfigError;
use crate::session::SessionError;
use crate::suggestions::SuggestionError;
use crate::workspaces::store::WorkspaceStoreError;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Workspace store error.
    #[error(transparent)]
    Workspace(#[from] WorkspaceStoreError),

    /// Automation run error.
    #[error(transparent)]
    Automation(#[from] AutomationError),

    /// Prompt suggestion error.
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    /// Wallet session error.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Other error.
    #[error("Domain error: {0}")]
    Other(String),
}
