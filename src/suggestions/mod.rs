//! Prompt suggestion state: free-text prompts are handed to an external
//! interpretation service and come back as ranked candidate actions. Only the
//! latest submission may update the displayed list.

pub mod errors;
pub mod events;
pub mod interpreter;
pub mod service;
pub mod types;

pub use errors::{InterpreterError, SuggestionCoreError, SuggestionError};
pub use events::SuggestionEvent;
pub use interpreter::PromptInterpreter;
pub use service::{DefaultSuggestionService, SubmissionOutcome, SuggestionService};
pub use types::{ActionKind, AiAction};
