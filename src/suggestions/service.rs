use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::errors::{InterpreterError, SuggestionError};
use super::events::SuggestionEvent;
use super::interpreter::PromptInterpreter;
use super::types::AiAction;

/// How a prompt submission ended up relative to the displayed list.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The result was current when it resolved and now is the displayed list.
    Applied(Vec<AiAction>),
    /// A later submission (or a dismissal) superseded this one before it
    /// resolved; its result was discarded.
    Superseded,
}

// --- SuggestionService Trait ---

#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Submits a free-text prompt for interpretation.
    ///
    /// Last submission wins: if a newer prompt is submitted before this one
    /// resolves, this result is discarded and never overwrites the newer
    /// one's display. Interpreter failures leave the previous list untouched.
    async fn submit_prompt(&self, prompt: &str) -> Result<SubmissionOutcome, SuggestionError>;

    fn current_suggestions(&self) -> Vec<AiAction>;

    /// Dismisses the panel: clears the displayed list and invalidates any
    /// submission still in flight.
    fn dismiss(&self);

    fn subscribe(&self) -> broadcast::Receiver<SuggestionEvent>;
}

// --- Internal state ---

struct SuggestionState {
    /// Generation token of the most recent submission or dismissal. A
    /// resolving submission compares its own token against this and discards
    /// itself when stale.
    generation: u64,
    suggestions: Vec<AiAction>,
}

// --- DefaultSuggestionService ---

#[derive(Clone)]
pub struct DefaultSuggestionService {
    state: Arc<Mutex<SuggestionState>>,
    interpreter: Arc<dyn PromptInterpreter>,
    event_publisher: broadcast::Sender<SuggestionEvent>,
    interpret_timeout: Option<Duration>,
}

impl DefaultSuggestionService {
    pub fn new(
        interpreter: Arc<dyn PromptInterpreter>,
        broadcast_capacity: usize,
        interpret_timeout: Option<Duration>,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Self {
            state: Arc::new(Mutex::new(SuggestionState {
                generation: 0,
                suggestions: Vec::new(),
            })),
            interpreter,
            event_publisher,
            interpret_timeout,
        }
    }

    pub fn with_config(
        interpreter: Arc<dyn PromptInterpreter>,
        config: &crate::config::DomainConfig,
    ) -> Self {
        Self::new(
            interpreter,
            config.event_capacity,
            config.interpreter_timeout(),
        )
    }

    async fn interpret_with_timeout(
        &self,
        prompt: &str,
    ) -> Result<Result<Vec<AiAction>, InterpreterError>, SuggestionError> {
        match self.interpret_timeout {
            Some(limit) => tokio::time::timeout(limit, self.interpreter.interpret(prompt))
                .await
                .map_err(|_| SuggestionError::Timeout),
            None => Ok(self.interpreter.interpret(prompt).await),
        }
    }
}

#[async_trait]
impl SuggestionService for DefaultSuggestionService {
    async fn submit_prompt(&self, prompt: &str) -> Result<SubmissionOutcome, SuggestionError> {
        if prompt.trim().is_empty() {
            debug!("Rejecting empty prompt without invoking the interpreter");
            return Err(SuggestionError::InvalidPrompt);
        }

        let request_id = Uuid::new_v4();
        let token = {
            let mut state = self.state.lock().expect("Mutex poisoned");
            state.generation += 1;
            state.generation
        };
        info!("Submitting prompt (request {})", request_id);

        let outcome = match self.interpret_with_timeout(prompt).await {
            Ok(result) => result,
            Err(SuggestionError::Timeout) => {
                let state = self.state.lock().expect("Mutex poisoned");
                if state.generation != token {
                    debug!("Discarding stale timed-out submission {}", request_id);
                    return Ok(SubmissionOutcome::Superseded);
                }
                drop(state);
                warn!("Prompt interpretation timed out (request {})", request_id);
                let _ = self.event_publisher.send(SuggestionEvent::SuggestionFailed {
                    request_id,
                    reason: "timed out".to_string(),
                });
                return Err(SuggestionError::Timeout);
            }
            Err(other) => return Err(other),
        };

        let mut state = self.state.lock().expect("Mutex poisoned");
        if state.generation != token {
            debug!(
                "Discarding stale result for request {} (submission superseded)",
                request_id
            );
            return Ok(SubmissionOutcome::Superseded);
        }

        match outcome {
            Ok(actions) => {
                state.suggestions = actions.clone();
                drop(state);
                info!(
                    "Applied {} suggested actions (request {})",
                    actions.len(),
                    request_id
                );
                let _ = self.event_publisher.send(SuggestionEvent::SuggestionsUpdated {
                    request_id,
                    actions: actions.clone(),
                });
                Ok(SubmissionOutcome::Applied(actions))
            }
            Err(source) => {
                // Previous suggestions stay visible; only the error surfaces.
                drop(state);
                warn!(
                    "Prompt interpretation failed (request {}): {}",
                    request_id, source
                );
                let _ = self.event_publisher.send(SuggestionEvent::SuggestionFailed {
                    request_id,
                    reason: source.to_string(),
                });
                Err(SuggestionError::InterpreterFailed { source })
            }
        }
    }

    fn current_suggestions(&self) -> Vec<AiAction> {
        self.state.lock().expect("Mutex poisoned").suggestions.clone()
    }

    fn dismiss(&self) {
        let mut state = self.state.lock().expect("Mutex poisoned");
        state.generation += 1;
        state.suggestions.clear();
        drop(state);
        debug!("Suggestion panel dismissed");
        let _ = self.event_publisher.send(SuggestionEvent::SuggestionsDismissed);
    }

    fn subscribe(&self) -> broadcast::Receiver<SuggestionEvent> {
        self.event_publisher.subscribe()
    }
}
