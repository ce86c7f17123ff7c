use async_trait::async_trait;

use super::errors::InterpreterError;
use super::types::AiAction;

/// External prompt-to-action inference service.
///
/// Input is raw prompt text; output is a ranked list of candidate actions
/// with confidence scores. The service is free to return an empty list for
/// prompts it cannot map to any action.
#[async_trait]
pub trait PromptInterpreter: Send + Sync {
    async fn interpret(&self, prompt: &str) -> Result<Vec<AiAction>, InterpreterError>;
}
