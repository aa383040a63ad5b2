//! Error types for schedule generation

use thiserror::Error;

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ValidationError>;

/// Input validation errors raised before any pairing is computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer participants than a round-robin needs
    #[error("At least {min} participants are required, got {requested}")]
    TooFewParticipants { requested: usize, min: usize },

    /// Custom name list does not match the participant count
    #[error("Custom names must be exactly {expected}, got {actual}")]
    NameCountMismatch { expected: usize, actual: usize },
}
