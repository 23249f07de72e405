//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (`ActionError`, `GridError`, `WeaponError`,
//! `LevelError`) live next to the code that produces them and implement
//! [`GameError`] so callers can classify them uniformly.
//!
//! No error in this crate is retryable in the I/O sense: every operation is a
//! pure function of the current state, so recovery means issuing a different
//! action.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The action is legal in general but not right now (wall ahead, empty
    /// magazine). The player can pick another action.
    Recoverable,

    /// Malformed input (unknown weapon slot, target off the map).
    Validation,

    /// Simulation state disagrees with itself. Indicates a bug.
    Internal,

    /// The run cannot continue (game over).
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tactics-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by impact
/// - `error_code` is the stable reason code surfaced to presentation layers
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
