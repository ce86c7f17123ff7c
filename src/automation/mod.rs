//! Per-workspace automation runs: one-shot asynchronous side-effecting
//! actions delegated to an external execution service, with non-overlap
//! bookkeeping per workspace id.

pub mod errors;
pub mod events;
pub mod executor;
pub mod runner;

pub use errors::{AutomationError, ExecutorError};
pub use events::AutomationEvent;
pub use executor::AutomationExecutor;
pub use runner::AutomationRunner;
