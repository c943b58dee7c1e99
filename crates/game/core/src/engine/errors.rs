//! Error types for the tick pipeline.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameOutcome, GridError};

/// Identifies which stage of the tick produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickPhase {
    /// Registering the bomb armed this tick on its grid cell.
    PlaceBomb,
}

impl TickPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickPhase::PlaceBomb => "place_bomb",
        }
    }
}

/// Associates a tick phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickPhaseError<E> {
    pub phase: TickPhase,
    pub error: E,
}

impl<E> TickPhaseError<E> {
    pub fn new(phase: TickPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TickPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TickPhaseError<E> {}

/// Errors surfaced while stepping the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepError {
    /// The game already reached a terminal state; nothing was simulated.
    #[error("game is over ({outcome})")]
    GameOver { outcome: GameOutcome },

    #[error("grid update failed: {0}")]
    Grid(TickPhaseError<GridError>),
}

impl StepError {
    pub(crate) fn grid(phase: TickPhase, error: GridError) -> Self {
        Self::Grid(TickPhaseError::new(phase, error))
    }
}

impl GameError for StepError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameOver { .. } => ErrorSeverity::Validation,
            Self::Grid(inner) => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver { .. } => "STEP_GAME_OVER",
            Self::Grid(inner) => inner.error.error_code(),
        }
    }
}
