use serde::{Deserialize, Serialize};

use crate::shared_types::WalletAddress;

/// Connection state reported by the external wallet adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WalletSession {
    pub connected: bool,
    pub public_key: Option<WalletAddress>,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(public_key: WalletAddress) -> Self {
        Self {
            connected: true,
            public_key: Some(public_key),
        }
    }

    /// Connected with a known identity; only such sessions gate workspace
    /// loading.
    pub fn is_authenticated(&self) -> bool {
        self.connected && self.public_key.is_some()
    }
}
