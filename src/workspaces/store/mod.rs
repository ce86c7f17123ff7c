pub mod errors;
pub mod events;

pub use errors::WorkspaceStoreError;
pub use events::WorkspaceEvent;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::workspaces::core::{Workspace, WorkspaceId};
use crate::workspaces::provider::WorkspaceSourceProvider;

// --- WorkspaceStore Trait ---

#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Replaces the entire collection with a fresh fetch from the upstream
    /// source. On failure the previous collection is left untouched; partial
    /// data is never exposed.
    async fn load(&self) -> Result<Vec<Workspace>, WorkspaceStoreError>;

    /// Moves the workspace at `source_index` to `dest_index` in a single
    /// atomic update. Equal indices are an idempotent no-op; out-of-range
    /// indices are a precondition violation, not a silent no-op.
    async fn reorder(
        &self,
        source_index: usize,
        dest_index: usize,
    ) -> Result<Vec<Workspace>, WorkspaceStoreError>;

    fn workspaces(&self) -> Vec<Workspace>;
    fn get_workspace(&self, id: &WorkspaceId) -> Option<Workspace>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent>;
}

// --- Internal state ---

struct WorkspaceStoreInternalState {
    workspaces: HashMap<WorkspaceId, Workspace>,
    ordered_ids: Vec<WorkspaceId>,
}

impl WorkspaceStoreInternalState {
    fn ordered_workspaces(&self) -> Vec<Workspace> {
        self.ordered_ids
            .iter()
            .filter_map(|id| self.workspaces.get(id).cloned())
            .collect()
    }
}

// --- DefaultWorkspaceStore ---

#[derive(Clone)]
pub struct DefaultWorkspaceStore {
    internal: Arc<Mutex<WorkspaceStoreInternalState>>,
    source_provider: Arc<dyn WorkspaceSourceProvider>,
    event_publisher: broadcast::Sender<WorkspaceEvent>,
}

impl DefaultWorkspaceStore {
    pub fn new(
        source_provider: Arc<dyn WorkspaceSourceProvider>,
        broadcast_capacity: usize,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Self {
            internal: Arc::new(Mutex::new(WorkspaceStoreInternalState {
                workspaces: HashMap::new(),
                ordered_ids: Vec::new(),
            })),
            source_provider,
            event_publisher,
        }
    }

    pub fn with_config(
        source_provider: Arc<dyn WorkspaceSourceProvider>,
        config: &crate::config::DomainConfig,
    ) -> Self {
        Self::new(source_provider, config.event_capacity)
    }
}

#[async_trait]
impl WorkspaceStore for DefaultWorkspaceStore {
    async fn load(&self) -> Result<Vec<Workspace>, WorkspaceStoreError> {
        info!("Loading workspaces from the upstream source...");
        // Fetch completes before the lock is taken, so a failed or slow fetch
        // never leaves the collection in an intermediate state.
        let fetched = self
            .source_provider
            .fetch_workspaces()
            .await
            .map_err(|source| {
                warn!("Workspace source fetch failed: {}", source);
                WorkspaceStoreError::LoadFailed { source }
            })?;

        let mut workspaces = HashMap::with_capacity(fetched.len());
        let mut ordered_ids = Vec::with_capacity(fetched.len());
        for ws in fetched {
            let id = ws.id().clone();
            if workspaces.insert(id.clone(), ws).is_some() {
                warn!("Upstream batch contains duplicate workspace ID '{}'", id);
                return Err(WorkspaceStoreError::DuplicateWorkspaceId(id));
            }
            ordered_ids.push(id);
        }

        let snapshot = {
            let mut guard = self.internal.lock().expect("Mutex poisoned");
            guard.workspaces = workspaces;
            guard.ordered_ids = ordered_ids;
            guard.ordered_workspaces()
        };

        info!("Loaded {} workspaces", snapshot.len());
        let _ = self.event_publisher.send(WorkspaceEvent::WorkspacesLoaded {
            order: snapshot.iter().map(|ws| ws.id().clone()).collect(),
        });
        Ok(snapshot)
    }

    async fn reorder(
        &self,
        source_index: usize,
        dest_index: usize,
    ) -> Result<Vec<Workspace>, WorkspaceStoreError> {
        let (snapshot, order) = {
            let mut guard = self.internal.lock().expect("Mutex poisoned");
            let len = guard.ordered_ids.len();
            if source_index >= len {
                return Err(WorkspaceStoreError::IndexOutOfRange {
                    index: source_index,
                    len,
                });
            }
            if dest_index >= len {
                return Err(WorkspaceStoreError::IndexOutOfRange {
                    index: dest_index,
                    len,
                });
            }
            if source_index == dest_index {
                debug!("Reorder {} -> {} is a no-op", source_index, dest_index);
                return Ok(guard.ordered_workspaces());
            }

            let id_to_move = guard.ordered_ids.remove(source_index);
            guard.ordered_ids.insert(dest_index, id_to_move);
            (guard.ordered_workspaces(), guard.ordered_ids.clone())
        };

        debug!("Reordered workspace {} -> {}", source_index, dest_index);
        let _ = self
            .event_publisher
            .send(WorkspaceEvent::WorkspaceOrderChanged(order));
        Ok(snapshot)
    }

    fn workspaces(&self) -> Vec<Workspace> {
        self.internal
            .lock()
            .expect("Mutex poisoned")
            .ordered_workspaces()
    }

    fn get_workspace(&self, id: &WorkspaceId) -> Option<Workspace> {
        self.internal
            .lock()
            .expect("Mutex poisoned")
            .workspaces
            .get(id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.internal.lock().expect("Mutex poisoned").ordered_ids.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent> {
        self.event_publisher.subscribe()
    }
}
