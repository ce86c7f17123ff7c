use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::AiAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SuggestionEvent {
    /// A submission resolved while still current and replaced the list.
    SuggestionsUpdated {
        request_id: Uuid,
        actions: Vec<AiAction>,
    },
    /// The current submission failed; the previous list is still shown.
    SuggestionFailed { request_id: Uuid, reason: String },
    /// The panel was dismissed and the list cleared.
    SuggestionsDismissed,
}
