//! Timezone handling utilities.
//!
//! This module provides functions for parsing timezone names, resolving
//! local wall-clock values to instants, and formatting the outputs the
//! normalizer produces.

use std::fmt::Write;

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotZoneError};

/// The default reference zone: Asia/Tashkent, UTC+05:00 with no DST.
pub const REFERENCE_ZONE: Tz = chrono_tz::Asia::Tashkent;

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use slotzone_core::tz::parse_tz;
///
/// let tz = parse_tz("Asia/Tashkent").unwrap();
/// assert_eq!(tz.to_string(), "Asia/Tashkent");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| SlotZoneError::InvalidTimezone(name.to_string()))
}

/// Resolve a wall-clock value in `tz` to an instant.
///
/// Ambiguous times (DST fall back) resolve to the earlier instant.
/// Nonexistent times (DST spring forward) are read with the offset in
/// effect before the gap, which lands them past it: 02:30 in a 02:00→03:00
/// gap becomes 03:30.
///
/// # Errors
///
/// [`SlotZoneError::OutOfRange`] if the shift leaves chrono's range.
pub fn local_to_zone(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => shift_across_gap(local, tz),
    }
}

fn shift_across_gap(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    let out_of_range =
        || SlotZoneError::OutOfRange(format!("Cannot resolve local time {} in {}", local, tz));

    let day_before = local
        .checked_sub_signed(chrono::Duration::days(1))
        .ok_or_else(out_of_range)?;
    let offset = tz
        .offset_from_local_datetime(&day_before)
        .earliest()
        .ok_or_else(out_of_range)?
        .fix();

    let utc = local
        .checked_sub_signed(chrono::Duration::seconds(i64::from(
            offset.local_minus_utc(),
        )))
        .ok_or_else(out_of_range)?;

    Ok(tz.from_utc_datetime(&utc))
}

/// Format a datetime as RFC3339 with its offset (e.g. `2025-07-23T14:30:00+05:00`).
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a UTC datetime as RFC3339 with Z suffix (e.g. `2025-07-23T09:30:00Z`).
pub fn format_rfc3339_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Format the calendar date part as `YYYY-MM-DD`.
pub fn format_date<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d").to_string()
}

/// Format the time-of-day part as `HH:mm`.
pub fn format_time_of_day<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Format with a caller-supplied strftime pattern.
///
/// # Errors
///
/// [`SlotZoneError::ParseError`] if the pattern is invalid.
pub fn format_with_pattern<T: TimeZone>(dt: &DateTime<T>, pattern: &str) -> Result<String>
where
    T::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern))
        .map_err(|_| SlotZoneError::ParseError(format!("Invalid format pattern: '{}'", pattern)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parse_reference_zone() {
        assert_eq!(parse_tz("Asia/Tashkent").unwrap(), REFERENCE_ZONE);
    }

    #[test]
    fn parse_invalid_timezone() {
        let result = parse_tz("Invalid/Timezone");
        if let Err(SlotZoneError::InvalidTimezone(name)) = result {
            assert_eq!(name, "Invalid/Timezone");
        } else {
            panic!("Expected InvalidTimezone error");
        }
    }

    #[test]
    fn tashkent_is_plus_five() {
        let dt = local_to_zone(local(2025, 7, 23, 14, 30), REFERENCE_ZONE).unwrap();
        assert_eq!(format_rfc3339(&dt), "2025-07-23T14:30:00+05:00");
        assert_eq!(
            format_rfc3339_utc(&dt.with_timezone(&Utc)),
            "2025-07-23T09:30:00Z"
        );
    }

    #[test]
    fn ambiguous_takes_earlier() {
        // Berlin falls back 03:00 -> 02:00 on 2026-10-25
        let tz = parse_tz("Europe/Berlin").unwrap();
        let dt = local_to_zone(local(2026, 10, 25, 2, 30), tz).unwrap();
        assert_eq!(format_rfc3339(&dt), "2026-10-25T02:30:00+02:00");
    }

    #[test]
    fn nonexistent_shifts_forward() {
        // Berlin springs forward 02:00 -> 03:00 on 2026-03-29
        let tz = parse_tz("Europe/Berlin").unwrap();
        let dt = local_to_zone(local(2026, 3, 29, 2, 30), tz).unwrap();
        assert_eq!(format_rfc3339(&dt), "2026-03-29T03:30:00+02:00");
    }

    #[test]
    fn date_and_time_formats() {
        let dt = local_to_zone(local(2025, 7, 3, 8, 5), REFERENCE_ZONE).unwrap();
        assert_eq!(format_date(&dt), "2025-07-03");
        assert_eq!(format_time_of_day(&dt), "08:05");
    }

    #[test]
    fn custom_pattern() {
        let dt = local_to_zone(local(2025, 7, 23, 14, 30), REFERENCE_ZONE).unwrap();
        assert_eq!(
            format_with_pattern(&dt, "%Y-%m-%d %H:%M").unwrap(),
            "2025-07-23 14:30"
        );
    }

    #[test]
    fn invalid_pattern_is_error() {
        let dt = local_to_zone(local(2025, 7, 23, 14, 30), REFERENCE_ZONE).unwrap();
        assert!(matches!(
            format_with_pattern(&dt, "%Q"),
            Err(SlotZoneError::ParseError(_))
        ));
    }
}
