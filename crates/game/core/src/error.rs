//! Common error infrastructure for bomb-core.
//!
//! Domain-specific errors (e.g. [`crate::GridError`], [`crate::StepError`])
//! live next to the code that raises them. This module only provides the
//! shared classification used by callers to decide how to react.
//!
//! Most gameplay "failures" are not errors at all: an illegal move, a bomb
//! request with an empty bag, or a player reaching zero lives are ordinary
//! outcomes of a tick. Errors are reserved for malformed input data and for
//! broken internal invariants.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid request from the caller, such as stepping a finished game.
    ///
    /// The state is untouched; the caller should stop issuing the request.
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: writing a decor outside the grid bounds.
    /// These indicate bugs and should be investigated.
    Internal,

    /// Unrecoverable error, no usable game state exists.
    ///
    /// Examples: unknown entity code in level data.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all bomb-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
