//! End-to-end flow over the wired domain services: wallet authenticates,
//! workspaces load, the user reorders them, runs an automation, and submits
//! a prompt.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use solspace_domain::{
    ActionKind, AiAction, AutomationExecutor, AutomationRunner, DefaultSuggestionService,
    DefaultWalletSessionService, DefaultWorkspaceStore, DomainConfig, ExecutorError,
    InterpreterError, PromptInterpreter, StaticWorkspaceProvider, SubmissionOutcome,
    SuggestionService, WalletAddress, WalletSession, WalletSessionService, WorkspaceId,
    WorkspaceStore,
};

struct NoopExecutor;

#[async_trait]
impl AutomationExecutor for NoopExecutor {
    async fn execute(&self, _workspace_id: &WorkspaceId) -> Result<(), ExecutorError> {
        Ok(())
    }
}

struct CannedInterpreter;

#[async_trait]
impl PromptInterpreter for CannedInterpreter {
    async fn interpret(&self, _prompt: &str) -> Result<Vec<AiAction>, InterpreterError> {
        let mut params = HashMap::new();
        params.insert("tokenIn".to_string(), serde_json::json!("SOL"));
        params.insert("tokenOut".to_string(), serde_json::json!("USDC"));
        params.insert("priceThreshold".to_string(), serde_json::json!(80));
        Ok(vec![AiAction::new(
            "1".to_string(),
            ActionKind::Swap,
            "Swap SOL to USDC when price reaches $80".to_string(),
            0.92,
            params,
        )
        .expect("canned action is valid")])
    }
}

#[tokio::test]
async fn wallet_connect_reorder_run_and_prompt() {
    let config = DomainConfig::from_toml_str("event_capacity = 16").unwrap();

    let provider = Arc::new(StaticWorkspaceProvider::with_defaults());
    let store = Arc::new(DefaultWorkspaceStore::with_config(provider, &config));
    let session = DefaultWalletSessionService::with_config(store.clone(), &config);

    // Nothing is loaded until the wallet authenticates.
    assert!(store.is_empty());
    session
        .update_session(WalletSession::connected(WalletAddress::from(
            "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
        )))
        .await
        .unwrap();

    let names: Vec<String> = store
        .workspaces()
        .iter()
        .map(|ws| ws.name().to_string())
        .collect();
    assert_eq!(names, vec!["DeFi Trading", "NFT Management"]);

    // Drag the first card below the second.
    let reordered = store.reorder(0, 1).await.unwrap();
    let names: Vec<&str> = reordered.iter().map(|ws| ws.name()).collect();
    assert_eq!(names, vec!["NFT Management", "DeFi Trading"]);

    // Trigger an automation run on the DeFi workspace.
    let runner = AutomationRunner::with_config(Arc::new(NoopExecutor), &config);
    runner.run(WorkspaceId::from("1")).await.unwrap();
    assert!(!runner.is_running(&WorkspaceId::from("1")));

    // Ask the AI panel for a workflow.
    let suggestions = DefaultSuggestionService::with_config(Arc::new(CannedInterpreter), &config);
    match suggestions.submit_prompt("swap sol to usdc at $80").await.unwrap() {
        SubmissionOutcome::Applied(actions) => {
            assert_eq!(actions.len(), 1);
            assert_eq!(actions[0].kind(), ActionKind::Swap);
        }
        o => panic!("Expected Applied, got {:?}", o),
    }
    assert_eq!(suggestions.current_suggestions().len(), 1);
}
