//! Epoch-anchored time-only payloads.
//!
//! Some backend fields used to carry just a time-of-day, serialized as a
//! full UTC timestamp on the Unix epoch date (`1970-01-01T13:00:00.000Z`).
//! The clock face of such a value is the intended reference-zone time; the
//! date and the `Z` are noise. Everything that knows about this shape lives
//! here.

use chrono::NaiveTime;

const EPOCH_DATE_PREFIX: &str = "1970-01-01T";

/// Returns true if `input` has the shape
/// `1970-01-01THH:mm(:ss)?(.fraction)?Z`.
///
/// Only the shape is checked; `1970-01-01T99:99Z` still matches.
///
/// ```
/// use slotzone_core::legacy::is_legacy_time_only;
///
/// assert!(is_legacy_time_only("1970-01-01T13:00:00.000Z"));
/// assert!(is_legacy_time_only("1970-01-01T03:00Z"));
/// assert!(!is_legacy_time_only("1970-01-01T13:00:00+00:00"));
/// assert!(!is_legacy_time_only("2025-07-23T13:00:00Z"));
/// ```
pub fn is_legacy_time_only(input: &str) -> bool {
    let Some(body) = input
        .strip_prefix(EPOCH_DATE_PREFIX)
        .and_then(|rest| rest.strip_suffix('Z'))
    else {
        return false;
    };

    let mut rest = match body.as_bytes() {
        [h1, h2, b':', m1, m2, tail @ ..] if all_digits(&[*h1, *h2, *m1, *m2]) => tail,
        _ => return false,
    };

    if let [b':', s1, s2, tail @ ..] = rest {
        if !all_digits(&[*s1, *s2]) {
            return false;
        }
        rest = tail;
    }

    match rest {
        [] => true,
        [b'.', fraction @ ..] => !fraction.is_empty() && all_digits(fraction),
        _ => false,
    }
}

/// Extract the intended time-of-day from a legacy payload.
///
/// Seconds and fractions are dropped; the result is always `HH:mm:00`.
/// Returns `None` if `input` is not a legacy payload or its clock face is
/// not a valid time.
///
/// ```
/// use chrono::NaiveTime;
/// use slotzone_core::legacy::legacy_time_of_day;
///
/// assert_eq!(
///     legacy_time_of_day("1970-01-01T13:05:42.123Z"),
///     NaiveTime::from_hms_opt(13, 5, 0)
/// );
/// assert_eq!(legacy_time_of_day("2025-07-23T13:05:00Z"), None);
/// ```
pub fn legacy_time_of_day(input: &str) -> Option<NaiveTime> {
    if !is_legacy_time_only(input) {
        return None;
    }

    let clock = &input[EPOCH_DATE_PREFIX.len()..];
    let hours: u32 = clock.get(0..2)?.parse().ok()?;
    let minutes: u32 = clock.get(3..5)?.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}
