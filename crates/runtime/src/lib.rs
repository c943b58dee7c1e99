//! Runtime orchestration for the deterministic bomb simulation.
//!
//! This crate wires the intent provider abstraction, the content loaders and
//! the core engine into a synchronous session API. Consumers embed
//! [`Runtime`] to drive ticks and observe [`GameEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] turns tick reports into high-level events
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{IdleIntentProvider, IntentProvider, QueuedIntentProvider, Result, RuntimeError};
pub use events::{GameEvent, extract_events};
pub use runtime::{Runtime, RuntimeBuilder};
