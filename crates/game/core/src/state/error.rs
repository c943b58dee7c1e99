//! State construction and grid errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{LevelIndex, Position};

/// Errors raised by [`crate::Grid`] mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Position is outside the grid bounds.
    #[error("position {position} is outside the {width}x{height} grid")]
    InvalidPosition {
        position: Position,
        width: u32,
        height: u32,
    },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        // Callers pre-validate positions, so reaching this is a bug.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPosition { .. } => "GRID_INVALID_POSITION",
        }
    }
}

/// Errors raised while building a [`crate::GameState`] from level layouts.
///
/// Construction is all-or-nothing: any of these aborts before a level exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error("campaign has no levels")]
    NoLevels,

    #[error("level layout has no cells")]
    EmptyLayout,

    #[error("layout declares {expected} cells but provides {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("unknown entity code {code:?} at {position}")]
    UnknownEntityCode { code: char, position: Position },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level {level} declares more than one player start")]
    DuplicatePlayerStart { level: LevelIndex },

    #[error("first level has no player start")]
    MissingPlayerStart,

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoLevels => "INIT_NO_LEVELS",
            Self::EmptyLayout => "INIT_EMPTY_LAYOUT",
            Self::CellCountMismatch { .. } => "INIT_CELL_COUNT_MISMATCH",
            Self::UnknownEntityCode { .. } => "INIT_UNKNOWN_ENTITY_CODE",
            Self::RaggedRow { .. } => "INIT_RAGGED_ROW",
            Self::DuplicatePlayerStart { .. } => "INIT_DUPLICATE_PLAYER_START",
            Self::MissingPlayerStart => "INIT_MISSING_PLAYER_START",
            Self::Grid(_) => "INIT_GRID",
        }
    }
}
