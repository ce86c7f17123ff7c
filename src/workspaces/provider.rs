use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use super::core::{AppRef, Workspace, WorkspaceId, WorkspaceStats};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Workspace source unreachable: {0}")]
    Unreachable(String),

    #[error("Workspace source returned malformed data: {0}")]
    MalformedData(String),
}

/// Upstream source of the workspace collection.
///
/// Implemented outside this crate against the actual backend; the store only
/// consumes full batches and never patches individual records.
#[async_trait]
pub trait WorkspaceSourceProvider: Send + Sync {
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, ProviderError>;
}

/// In-memory provider serving a fixed workspace set.
///
/// Used by demos and as a development stand-in while no backend is wired up.
pub struct StaticWorkspaceProvider {
    workspaces: Vec<Workspace>,
}

impl StaticWorkspaceProvider {
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        Self { workspaces }
    }

    /// The default Solspace development fixture: two workspaces mirroring the
    /// dashboard's stock content.
    pub fn with_defaults() -> Self {
        let app = |id: &str, name: &str| AppRef {
            id: id.to_string(),
            name: name.to_string(),
            icon: format!("https://apps.solspace.example/{}.svg", id),
        };

        let defi = Workspace::new(
            WorkspaceId::from("1"),
            "DeFi Trading".to_string(),
            "Automated trading workspace".to_string(),
            vec![
                app("jupiter", "Jupiter"),
                app("orca", "Orca"),
                app("raydium", "Raydium"),
            ],
            WorkspaceStats {
                total_value: 12450.0,
                performance_24h: 2.3,
            },
            3,
            Utc::now(),
        )
        .expect("default DeFi workspace is valid");

        let nft = Workspace::new(
            WorkspaceId::from("2"),
            "NFT Management".to_string(),
            "NFT tracking and trading".to_string(),
            vec![
                app("magic-eden", "Magic Eden"),
                app("tensor", "Tensor"),
                app("cardinal", "Cardinal"),
            ],
            WorkspaceStats {
                total_value: 8200.0,
                performance_24h: -1.1,
            },
            1,
            Utc::now(),
        )
        .expect("default NFT workspace is valid");

        Self::new(vec![defi, nft])
    }
}

#[async_trait]
impl WorkspaceSourceProvider for StaticWorkspaceProvider {
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, ProviderError> {
        debug!("Serving {} static workspaces", self.workspaces.len());
        Ok(self.workspaces.clone())
    }
}
