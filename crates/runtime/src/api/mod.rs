//! Public runtime API surface.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{IdleIntentProvider, IntentProvider, QueuedIntentProvider};
