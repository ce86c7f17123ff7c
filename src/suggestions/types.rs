use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::SuggestionCoreError;

/// Kind of structured action a prompt can be translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Swap,
    Monitor,
}

/// A candidate structured action suggested for a free-text prompt.
///
/// Ephemeral: created per prompt submission, discarded when a newer
/// submission resolves or the panel is dismissed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAction {
    id: String,
    kind: ActionKind,
    description: String,
    confidence: f64,
    #[serde(default)]
    params: HashMap<String, serde_json::Value>,
}

impl AiAction {
    pub fn new(
        id: String,
        kind: ActionKind,
        description: String,
        confidence: f64,
        params: HashMap<String, serde_json::Value>,
    ) -> Result<Self, SuggestionCoreError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SuggestionCoreError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            id,
            kind,
            description,
            confidence,
            params,
        })
    }

    // Getters
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
    pub fn params(&self) -> &HashMap<String, serde_json::Value> {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn swap_action(confidence: f64) -> Result<AiAction, SuggestionCoreError> {
        let mut params = HashMap::new();
        params.insert("tokenIn".to_string(), json!("SOL"));
        params.insert("tokenOut".to_string(), json!("USDC"));
        params.insert("priceThreshold".to_string(), json!(80));
        AiAction::new(
            "1".to_string(),
            ActionKind::Swap,
            "Swap SOL to USDC when price reaches $80".to_string(),
            confidence,
            params,
        )
    }

    #[test]
    fn ai_action_new_valid() {
        let action = swap_action(0.92).unwrap();
        assert_eq!(action.kind(), ActionKind::Swap);
        assert_eq!(action.confidence(), 0.92);
        assert_eq!(action.params()["tokenIn"], json!("SOL"));
    }

    #[test]
    fn ai_action_confidence_out_of_range() {
        assert!(matches!(
            swap_action(1.2),
            Err(SuggestionCoreError::ConfidenceOutOfRange(_))
        ));
        assert!(matches!(
            swap_action(-0.1),
            Err(SuggestionCoreError::ConfidenceOutOfRange(_))
        ));
    }

    #[test]
    fn action_kind_serializes_screaming_case() {
        assert_eq!(serde_json::to_string(&ActionKind::Swap).unwrap(), "\"SWAP\"");
        assert_eq!(
            serde_json::to_string(&ActionKind::Monitor).unwrap(),
            "\"MONITOR\""
        );
    }
}
