//! Core data types for slotzone.
//!
//! - [`InputKind`] - Shape classification of a raw timestamp string
//! - [`BareInputPolicy`] - How offset-less strings are read
//! - [`Conversion`] - Which normalizer operation to apply
//! - [`ConversionResult`] - Complete result of one conversion

use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SlotZoneError};
use crate::legacy::is_legacy_time_only;
use crate::parse::has_explicit_offset;

/// Shape of a raw timestamp string, decided before any parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Ends in `Z` or `±HH:mm`.
    Offset,
    /// Epoch-anchored time-of-day, e.g. `1970-01-01T13:00:00.000Z`.
    LegacyTimeOnly,
    /// No offset at all.
    Bare,
}

impl InputKind {
    /// Classify `input`. Returns `None` for empty input.
    ///
    /// ```
    /// use slotzone_core::InputKind;
    ///
    /// assert_eq!(InputKind::of("2025-07-23T09:30:00Z"), Some(InputKind::Offset));
    /// assert_eq!(InputKind::of("1970-01-01T13:00Z"), Some(InputKind::LegacyTimeOnly));
    /// assert_eq!(InputKind::of("2025-07-23T14:30:00"), Some(InputKind::Bare));
    /// assert_eq!(InputKind::of("  "), None);
    /// ```
    pub fn of(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else if is_legacy_time_only(trimmed) {
            Some(InputKind::LegacyTimeOnly)
        } else if has_explicit_offset(trimmed) {
            Some(InputKind::Offset)
        } else {
            Some(InputKind::Bare)
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Offset => write!(f, "offset"),
            InputKind::LegacyTimeOnly => write!(f, "legacy_time_only"),
            InputKind::Bare => write!(f, "bare"),
        }
    }
}

/// How a timestamp without an explicit offset is interpreted.
///
/// A bare `2025-07-23T14:30:00` could be reference-zone wall clock or UTC
/// with the `Z` dropped. Backend fields disagree, so the choice is made
/// per [`crate::Normalizer`] rather than baked in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BareInputPolicy {
    /// Already reference-zone wall clock.
    #[default]
    Reference,
    /// UTC with the offset omitted.
    Utc,
}

impl std::fmt::Display for BareInputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BareInputPolicy::Reference => write!(f, "reference"),
            BareInputPolicy::Utc => write!(f, "utc"),
        }
    }
}

impl FromStr for BareInputPolicy {
    type Err = SlotZoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reference" => Ok(BareInputPolicy::Reference),
            "utc" => Ok(BareInputPolicy::Utc),
            _ => Err(SlotZoneError::ParseError(format!(
                "Unknown bare input policy: '{}'. Expected 'reference' or 'utc'",
                s
            ))),
        }
    }
}

/// A single normalizer operation, selectable at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Full timestamp in the reference zone.
    #[default]
    Local,
    /// Full timestamp in UTC, for sending to the backend.
    Utc,
    /// `YYYY-MM-DD` in the reference zone.
    Date,
    /// UTC instant of the reference-zone midnight of a `YYYY-MM-DD` date.
    FromDate,
    /// `HH:mm` in the reference zone.
    Time,
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conversion::Local => write!(f, "local"),
            Conversion::Utc => write!(f, "utc"),
            Conversion::Date => write!(f, "date"),
            Conversion::FromDate => write!(f, "from_date"),
            Conversion::Time => write!(f, "time"),
        }
    }
}

impl FromStr for Conversion {
    type Err = SlotZoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Conversion::Local),
            "utc" => Ok(Conversion::Utc),
            "date" => Ok(Conversion::Date),
            "from_date" => Ok(Conversion::FromDate),
            "time" => Ok(Conversion::Time),
            _ => Err(SlotZoneError::ParseError(format!(
                "Unknown conversion: '{}'. Expected 'local', 'utc', 'date', 'from_date', or 'time'",
                s
            ))),
        }
    }
}

/// Complete result of one conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Original input string.
    pub input: String,
    /// Shape of the input, if non-empty.
    pub kind: Option<InputKind>,
    /// The reference zone used.
    pub tz: String,
    /// The operation applied.
    pub conversion: Conversion,
    /// The converted value.
    pub output: String,
}
