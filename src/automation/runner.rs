use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::errors::AutomationError;
use super::events::AutomationEvent;
use super::executor::AutomationExecutor;
use crate::workspaces::core::WorkspaceId;

/// Per-workspace asynchronous automation trigger.
///
/// Enforces at most one concurrent run per workspace id; runs for distinct
/// ids proceed independently. The run flag is held only for the duration of
/// the underlying execution and is released on every exit path.
#[derive(Clone)]
pub struct AutomationRunner {
    running: Arc<Mutex<HashSet<WorkspaceId>>>,
    executor: Arc<dyn AutomationExecutor>,
    event_publisher: broadcast::Sender<AutomationEvent>,
    run_timeout: Option<Duration>,
}

/// Clears the run flag when the run future completes or is dropped.
struct RunGuard {
    running: Arc<Mutex<HashSet<WorkspaceId>>>,
    workspace_id: WorkspaceId,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.running
            .lock()
            .expect("Mutex poisoned")
            .remove(&self.workspace_id);
    }
}

impl AutomationRunner {
    pub fn new(
        executor: Arc<dyn AutomationExecutor>,
        broadcast_capacity: usize,
        run_timeout: Option<Duration>,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Self {
            running: Arc::new(Mutex::new(HashSet::new())),
            executor,
            event_publisher,
            run_timeout,
        }
    }

    pub fn with_config(
        executor: Arc<dyn AutomationExecutor>,
        config: &crate::config::DomainConfig,
    ) -> Self {
        Self::new(executor, config.event_capacity, config.automation_timeout())
    }

    /// Triggers an automation run for `workspace_id`.
    ///
    /// Returns `AlreadyRunning` if a prior call for the same id has not yet
    /// resolved. The check and the mark happen under one lock, so two
    /// back-to-back calls can never both pass.
    pub async fn run(&self, workspace_id: WorkspaceId) -> Result<(), AutomationError> {
        {
            let mut running = self.running.lock().expect("Mutex poisoned");
            if !running.insert(workspace_id.clone()) {
                debug!("Rejecting overlapping run for workspace '{}'", workspace_id);
                return Err(AutomationError::AlreadyRunning(workspace_id));
            }
        }
        let _guard = RunGuard {
            running: self.running.clone(),
            workspace_id: workspace_id.clone(),
        };

        info!("Automation run started for workspace '{}'", workspace_id);
        let _ = self.event_publisher.send(AutomationEvent::RunStarted {
            workspace_id: workspace_id.clone(),
        });

        let outcome = match self.run_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.executor.execute(&workspace_id)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        "Automation run for workspace '{}' exceeded {:?}",
                        workspace_id, limit
                    );
                    let _ = self.event_publisher.send(AutomationEvent::RunFailed {
                        workspace_id: workspace_id.clone(),
                        reason: "timed out".to_string(),
                    });
                    return Err(AutomationError::Timeout(workspace_id));
                }
            },
            None => self.executor.execute(&workspace_id).await,
        };

        match outcome {
            Ok(()) => {
                info!("Automation run completed for workspace '{}'", workspace_id);
                let _ = self.event_publisher.send(AutomationEvent::RunCompleted {
                    workspace_id: workspace_id.clone(),
                });
                Ok(())
            }
            Err(source) => {
                warn!(
                    "Automation run failed for workspace '{}': {}",
                    workspace_id, source
                );
                let _ = self.event_publisher.send(AutomationEvent::RunFailed {
                    workspace_id: workspace_id.clone(),
                    reason: source.to_string(),
                });
                Err(AutomationError::ExecutionFailed {
                    workspace_id,
                    source,
                })
            }
        }
    }

    pub fn is_running(&self, workspace_id: &WorkspaceId) -> bool {
        self.running
            .lock()
            .expect("Mutex poisoned")
            .contains(workspace_id)
    }

    pub fn running_workspaces(&self) -> Vec<WorkspaceId> {
        self.running
            .lock()
            .expect("Mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AutomationEvent> {
        self.event_publisher.subscribe()
    }
}
