//! Wallet session gate: tracks the adapter-reported connection state and
//! loads the workspace collection once per authentication transition.

pub mod errors;
pub mod events;
pub mod service;
pub mod types;

pub use errors::SessionError;
pub use events::SessionEvent;
pub use service::{DefaultWalletSessionService, WalletSessionService};
pub use types::WalletSession;
