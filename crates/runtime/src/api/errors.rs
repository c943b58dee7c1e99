//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from state construction and engine steps so clients can
//! bubble them up with consistent context.
use bomb_core::{GameOutcome, InitializationError, StepError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("intent provider not set")]
    ProviderNotSet,

    #[error("runtime requires at least one level before building")]
    MissingLevels,

    #[error("failed to initialize game state from levels")]
    InitialState(#[source] InitializationError),

    #[error("game is over: {}", outcome.message())]
    GameOver { outcome: GameOutcome },

    #[error("engine step failed")]
    Step(#[source] StepError),
}

impl From<StepError> for RuntimeError {
    fn from(error: StepError) -> Self {
        match error {
            StepError::GameOver { outcome } => RuntimeError::GameOver { outcome },
            other => RuntimeError::Step(other),
        }
    }
}
