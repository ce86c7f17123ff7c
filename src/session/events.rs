use serde::{Deserialize, Serialize};

use super::types::WalletSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    SessionChanged {
        previous: WalletSession,
        current: WalletSession,
    },
}
