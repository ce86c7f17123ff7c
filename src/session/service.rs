use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::errors::SessionError;
use super::events::SessionEvent;
use super::types::WalletSession;
use crate::workspaces::store::WorkspaceStore;

// --- WalletSessionService Trait ---

#[async_trait]
pub trait WalletSessionService: Send + Sync {
    /// Records a session update from the wallet adapter.
    ///
    /// On each transition from not-authenticated to authenticated the
    /// workspace store is loaded exactly once; a reconnect after a disconnect
    /// triggers a fresh load, repeated updates while authenticated do not.
    async fn update_session(&self, session: WalletSession) -> Result<(), SessionError>;

    fn current_session(&self) -> WalletSession;
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;
}

// --- DefaultWalletSessionService ---

#[derive(Clone)]
pub struct DefaultWalletSessionService {
    current: Arc<Mutex<WalletSession>>,
    workspace_store: Arc<dyn WorkspaceStore>,
    event_publisher: broadcast::Sender<SessionEvent>,
}

impl DefaultWalletSessionService {
    pub fn new(workspace_store: Arc<dyn WorkspaceStore>, broadcast_capacity: usize) -> Self {
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Self {
            current: Arc::new(Mutex::new(WalletSession::disconnected())),
            workspace_store,
            event_publisher,
        }
    }

    pub fn with_config(
        workspace_store: Arc<dyn WorkspaceStore>,
        config: &crate::config::DomainConfig,
    ) -> Self {
        Self::new(workspace_store, config.event_capacity)
    }
}

#[async_trait]
impl WalletSessionService for DefaultWalletSessionService {
    async fn update_session(&self, session: WalletSession) -> Result<(), SessionError> {
        let (previous, should_load) = {
            let mut current = self.current.lock().expect("Mutex poisoned");
            let previous = std::mem::replace(&mut *current, session.clone());
            let should_load = !previous.is_authenticated() && session.is_authenticated();
            (previous, should_load)
        };

        if previous != session {
            debug!(
                "Wallet session changed: connected={} key_present={}",
                session.connected,
                session.public_key.is_some()
            );
            let _ = self.event_publisher.send(SessionEvent::SessionChanged {
                previous,
                current: session.clone(),
            });
        }

        if should_load {
            info!("Wallet authenticated; loading workspaces");
            self.workspace_store.load().await?;
        }
        Ok(())
    }

    fn current_session(&self) -> WalletSession {
        self.current.lock().expect("Mutex poisoned").clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_publisher.subscribe()
    }
}
