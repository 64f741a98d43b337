//! Input parsing for timestamps, dates and times of day.
//!
//! Raw strings come in three shapes (see [`crate::InputKind`]):
//! - offset-bearing: `2025-07-23T09:30:00Z`, `2025-07-23T14:30:00+05:00`
//! - legacy time-only: `1970-01-01T13:00:00.000Z`
//! - bare: `2025-07-23T14:30:00`, `2025-07-23 14:30`, `2025-07-23`
//!
//! This module only parses. Deciding which zone a bare value lives in is
//! the normalizer's job.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, SlotZoneError};
use crate::legacy::{is_legacy_time_only, legacy_time_of_day};
use crate::models::InputKind;

const BARE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A raw input string after classification and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInput {
    /// An absolute instant with its original offset.
    Offset(DateTime<FixedOffset>),
    /// A legacy payload's intended time-of-day.
    LegacyTimeOnly(NaiveTime),
    /// Wall clock with no zone attached. Date-only input lands at midnight.
    Bare(NaiveDateTime),
}

impl ParsedInput {
    /// The shape this input was classified as.
    pub fn kind(&self) -> InputKind {
        match self {
            ParsedInput::Offset(_) => InputKind::Offset,
            ParsedInput::LegacyTimeOnly(_) => InputKind::LegacyTimeOnly,
            ParsedInput::Bare(_) => InputKind::Bare,
        }
    }
}

/// Returns true if `input` ends with `Z` or a `±HH:mm` offset.
///
/// ```
/// use slotzone_core::parse::has_explicit_offset;
///
/// assert!(has_explicit_offset("2025-07-23T09:30:00Z"));
/// assert!(has_explicit_offset("2025-07-23T14:30:00+05:00"));
/// assert!(has_explicit_offset("2025-07-23T06:30:00-03:00"));
/// assert!(!has_explicit_offset("2025-07-23T14:30:00"));
/// ```
pub fn has_explicit_offset(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.last() == Some(&b'Z') {
        return true;
    }

    match bytes.len().checked_sub(6).map(|start| &bytes[start..]) {
        Some([sign, h1, h2, b':', m1, m2]) => {
            matches!(sign, b'+' | b'-')
                && [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Classify and parse a raw input string.
///
/// # Errors
///
/// [`SlotZoneError::EmptyInput`] for empty input, otherwise
/// [`SlotZoneError::ParseError`] if the string does not parse as its shape.
///
/// # Examples
///
/// ```
/// use slotzone_core::parse::{parse_input, ParsedInput};
///
/// let parsed = parse_input("2025-07-23").unwrap();
/// assert!(matches!(parsed, ParsedInput::Bare(_)));
/// ```
pub fn parse_input(input: &str) -> Result<ParsedInput> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SlotZoneError::EmptyInput);
    }

    if is_legacy_time_only(trimmed) {
        return legacy_time_of_day(trimmed)
            .map(ParsedInput::LegacyTimeOnly)
            .ok_or_else(|| {
                SlotZoneError::ParseError(format!(
                    "Invalid legacy time-only payload: '{}'",
                    trimmed
                ))
            });
    }

    if has_explicit_offset(trimmed) {
        return parse_offset_datetime(trimmed).map(ParsedInput::Offset);
    }

    parse_bare_datetime(trimmed).map(ParsedInput::Bare)
}

/// Parse an offset-bearing timestamp. Seconds and fractions are optional.
pub fn parse_offset_datetime(input: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }

    // Minute precision, e.g. `2025-07-23T14:30Z`
    let normalized = match trimmed.strip_suffix('Z') {
        Some(head) => format!("{}+00:00", head),
        None => trimmed.to_string(),
    };

    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").map_err(|e| {
        SlotZoneError::ParseError(format!(
            "Invalid offset timestamp: '{}'. Error: {}",
            input, e
        ))
    })
}

/// Parse a timestamp without offset. Date-only input yields midnight.
pub fn parse_bare_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for fmt in &BARE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    parse_date(trimmed)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| {
            SlotZoneError::ParseError(format!(
                "Invalid local timestamp: '{}'. Expected YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
                input
            ))
        })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SlotZoneError::EmptyInput);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        SlotZoneError::ParseError(format!(
            "Invalid date: '{}'. Expected YYYY-MM-DD",
            input
        ))
    })
}

/// Normalize a slot time to `HH:mm`, ignoring punctuation.
///
/// With a `:` anywhere, the first five characters are taken as `HH:mm`;
/// without one, the first four digits are read as `HHmm`. Seconds never
/// survive.
///
/// ```
/// use chrono::NaiveTime;
/// use slotzone_core::parse::normalize_time_of_day;
///
/// let expected = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(normalize_time_of_day("08:00").unwrap(), expected);
/// assert_eq!(normalize_time_of_day("0800").unwrap(), expected);
/// assert_eq!(normalize_time_of_day("08:00:59").unwrap(), expected);
/// ```
pub fn normalize_time_of_day(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SlotZoneError::EmptyInput);
    }

    let hhmm = if trimmed.contains(':') {
        trimmed.get(..5).unwrap_or(trimmed).to_string()
    } else {
        match (trimmed.get(..2), trimmed.get(2..4)) {
            (Some(hours), Some(minutes)) => format!("{}:{}", hours, minutes),
            _ => trimmed.to_string(),
        }
    };

    NaiveTime::parse_from_str(&hhmm, "%H:%M").map_err(|_| {
        SlotZoneError::ParseError(format!(
            "Invalid time of day: '{}'. Expected HH:MM or HHMM",
            input
        ))
    })
}

/// Parse a standalone time-of-day (`HH:mm:ss`, `HH:mm` or `HHmm`).
///
/// Returns `None` for anything longer, such as a full timestamp. Unlike
/// [`normalize_time_of_day`] seconds are kept.
pub fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    let trimmed = input.trim();

    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveTime::parse_from_str(trimmed, "%H%M").ok();
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn offset_detection_requires_colon_form() {
        assert!(!has_explicit_offset("2025-07-23T14:30:00+0500"));
        assert!(!has_explicit_offset("2025-07-23"));
        assert!(!has_explicit_offset(""));
        assert!(!has_explicit_offset("14:30"));
        assert!(has_explicit_offset("Z"));
    }

    #[test]
    fn parse_offset_with_seconds() {
        let parsed = parse_input("2025-07-23T09:30:00Z").unwrap();
        let ParsedInput::Offset(dt) = parsed else {
            panic!("Expected offset input");
        };
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn parse_offset_with_fraction() {
        let dt = parse_offset_datetime("2025-07-23T14:30:00.250+05:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600);
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn parse_offset_minute_precision() {
        let dt = parse_offset_datetime("2025-07-23T14:30Z").unwrap();
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 0);

        let dt = parse_offset_datetime("2025-07-23T14:30-03:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn parse_legacy_payload() {
        let parsed = parse_input("1970-01-01T13:00:00.000Z").unwrap();
        assert_eq!(
            parsed,
            ParsedInput::LegacyTimeOnly(NaiveTime::from_hms_opt(13, 0, 0).unwrap())
        );
        assert_eq!(parsed.kind(), InputKind::LegacyTimeOnly);
    }

    #[test]
    fn parse_impossible_legacy_payload() {
        assert!(matches!(
            parse_input("1970-01-01T99:00Z"),
            Err(SlotZoneError::ParseError(_))
        ));
    }

    #[test]
    fn parse_bare_variants() {
        for input in [
            "2025-07-23T14:30:00",
            "2025-07-23 14:30:00",
            "2025-07-23T14:30",
            "2025-07-23 14:30",
            "2025-07-23T14:30:00.000",
        ] {
            let dt = parse_bare_datetime(input).unwrap();
            assert_eq!((dt.hour(), dt.minute()), (14, 30), "{}", input);
        }
    }

    #[test]
    fn parse_bare_date_is_midnight() {
        let parsed = parse_input("2025-07-23").unwrap();
        let ParsedInput::Bare(dt) = parsed else {
            panic!("Expected bare input");
        };
        assert_eq!(dt.day(), 23);
        assert_eq!(dt.time(), NaiveTime::MIN);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse_input(""), Err(SlotZoneError::EmptyInput));
        assert_eq!(parse_input("  \t"), Err(SlotZoneError::EmptyInput));
        assert_eq!(parse_date(""), Err(SlotZoneError::EmptyInput));
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            parse_input("not-a-date"),
            Err(SlotZoneError::ParseError(_))
        ));
        assert!(matches!(
            parse_input("garbageZ"),
            Err(SlotZoneError::ParseError(_))
        ));
    }

    #[test]
    fn normalize_time_forms() {
        let expected = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(normalize_time_of_day("14:30").unwrap(), expected);
        assert_eq!(normalize_time_of_day("1430").unwrap(), expected);
        assert_eq!(normalize_time_of_day("14:30:45").unwrap(), expected);
        assert_eq!(normalize_time_of_day("143000").unwrap(), expected);
    }

    #[test]
    fn normalize_time_rejects_bad_input() {
        assert_eq!(normalize_time_of_day(""), Err(SlotZoneError::EmptyInput));
        assert!(normalize_time_of_day("25:00").is_err());
        assert!(normalize_time_of_day("abc").is_err());
        assert!(normalize_time_of_day("930").is_err());
    }

    #[test]
    fn standalone_time_of_day() {
        assert_eq!(
            parse_time_of_day("14:30"),
            NaiveTime::from_hms_opt(14, 30, 0)
        );
        assert_eq!(
            parse_time_of_day("14:30:15"),
            NaiveTime::from_hms_opt(14, 30, 15)
        );
        assert_eq!(parse_time_of_day("0800"), NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(parse_time_of_day("2025-07-23T14:30:00Z"), None);
        assert_eq!(parse_time_of_day("1970-01-01T14:30Z"), None);
    }
}
