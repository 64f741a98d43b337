//! Error types for slotzone-core.
//!
//! Only the strict `try_*` operations surface these. The display-layer
//! variants on [`crate::Normalizer`] absorb them.

use thiserror::Error;

/// The main error type for slotzone operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotZoneError {
    /// The input was empty or whitespace only.
    #[error("Empty input")]
    EmptyInput,

    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Error parsing a date, time or timestamp.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Date arithmetic left the representable range.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for slotzone operations.
pub type Result<T> = std::result::Result<T, SlotZoneError>;
