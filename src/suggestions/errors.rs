use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SuggestionCoreError {
    #[error("Action confidence {0} is outside [0, 1].")]
    ConfidenceOutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("Prompt interpretation service unreachable: {0}")]
    Unreachable(String),

    #[error("Prompt interpretation failed: {0}")]
    InterpretationFailed(String),
}

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("Prompt is empty or whitespace-only.")]
    InvalidPrompt,

    #[error("Prompt interpretation failed: {source}")]
    InterpreterFailed {
        #[source]
        source: InterpreterError,
    },

    #[error("Prompt interpretation timed out.")]
    Timeout,

    #[error("Suggestion core error: {0}")]
    CoreError(#[from] SuggestionCoreError),
}
