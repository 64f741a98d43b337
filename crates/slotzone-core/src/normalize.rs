//! Reference-zone wall-clock normalization.
//!
//! A [`Normalizer`] converts between absolute instants and wall-clock
//! values in one reference zone, and composes a picked date with a picked
//! time-of-day into a single instant.
//!
//! Every operation comes in two forms:
//! - `try_*` returns a [`Result`] and reports what went wrong.
//! - The plain form is for display code and never fails: empty input gives
//!   an empty string, anything else that fails gives the input back
//!   unchanged.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SlotZoneError};
use crate::models::{BareInputPolicy, Conversion};
use crate::parse::{
    ParsedInput, normalize_time_of_day, parse_date, parse_input, parse_offset_datetime,
};
use crate::tz::{
    REFERENCE_ZONE, format_date, format_rfc3339, format_rfc3339_utc, format_time_of_day,
    format_with_pattern, local_to_zone,
};

/// Converts timestamps to and from one reference zone's wall clock.
///
/// # Examples
///
/// ```
/// use slotzone_core::Normalizer;
///
/// let normalizer = Normalizer::default();
///
/// assert_eq!(
///     normalizer.to_local_display("2025-07-23T09:30:00Z"),
///     "2025-07-23T14:30:00+05:00"
/// );
/// assert_eq!(
///     normalizer.compose_scheduled_instant("14:30", Some("2025-07-23")),
///     "2025-07-23T14:30:00+05:00"
/// );
/// assert_eq!(normalizer.to_time_of_day_display("2025-07-23T09:30:00Z"), "14:30");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<C = SystemClock> {
    zone: Tz,
    bare_policy: BareInputPolicy,
    clock: C,
}

impl Normalizer<SystemClock> {
    /// A normalizer for `zone` reading the system clock.
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            bare_policy: BareInputPolicy::default(),
            clock: SystemClock,
        }
    }
}

impl Default for Normalizer<SystemClock> {
    fn default() -> Self {
        Self::new(REFERENCE_ZONE)
    }
}

impl<C: Clock> Normalizer<C> {
    /// Replace the clock used to decide "today".
    pub fn with_clock<D: Clock>(self, clock: D) -> Normalizer<D> {
        Normalizer {
            zone: self.zone,
            bare_policy: self.bare_policy,
            clock,
        }
    }

    /// Set how offset-less input is read.
    pub fn with_bare_policy(mut self, policy: BareInputPolicy) -> Self {
        self.bare_policy = policy;
        self
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn bare_policy(&self) -> BareInputPolicy {
        self.bare_policy
    }

    /// Today's calendar date in the reference zone.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.zone).date_naive()
    }

    /// Resolve any accepted input to an instant in the reference zone.
    ///
    /// Legacy time-only payloads land on today's date. Bare input is read
    /// according to the [`BareInputPolicy`].
    pub fn resolve(&self, input: &str) -> Result<DateTime<Tz>> {
        match parse_input(input)? {
            ParsedInput::Offset(dt) => Ok(dt.with_timezone(&self.zone)),
            ParsedInput::LegacyTimeOnly(time) => {
                local_to_zone(self.today().and_time(time), self.zone)
            }
            ParsedInput::Bare(naive) => match self.bare_policy {
                BareInputPolicy::Reference => local_to_zone(naive, self.zone),
                BareInputPolicy::Utc => Ok(Utc.from_utc_datetime(&naive).with_timezone(&self.zone)),
            },
        }
    }

    /// Full timestamp in the reference zone, e.g. `2025-07-23T14:30:00+05:00`.
    pub fn try_to_local_display(&self, input: &str) -> Result<String> {
        self.resolve(input).map(|dt| format_rfc3339(&dt))
    }

    /// Display form of [`Self::try_to_local_display`].
    pub fn to_local_display(&self, input: &str) -> String {
        lenient(input, self.try_to_local_display(input))
    }

    /// The instant as UTC, e.g. `2025-07-23T09:30:00Z`.
    ///
    /// An explicit offset is trusted as-is, so legacy payloads are treated
    /// as the real 1970 instant they spell out.
    pub fn try_to_utc(&self, input: &str) -> Result<DateTime<Utc>> {
        let instant = match parse_input(input)? {
            ParsedInput::Offset(dt) => dt.with_timezone(&Utc),
            ParsedInput::LegacyTimeOnly(_) => parse_offset_datetime(input)?.with_timezone(&Utc),
            ParsedInput::Bare(naive) => match self.bare_policy {
                BareInputPolicy::Reference => local_to_zone(naive, self.zone)?.with_timezone(&Utc),
                BareInputPolicy::Utc => Utc.from_utc_datetime(&naive),
            },
        };
        Ok(instant)
    }

    /// Display form of [`Self::try_to_utc`], formatted for the backend.
    pub fn to_utc_for_transmission(&self, input: &str) -> String {
        lenient(input, self.try_to_utc(input).map(|dt| format_rfc3339_utc(&dt)))
    }

    /// Reference-zone calendar date as `YYYY-MM-DD`.
    pub fn try_to_date_only(&self, input: &str) -> Result<String> {
        self.resolve(input).map(|dt| format_date(&dt))
    }

    pub fn to_date_only(&self, input: &str) -> String {
        lenient(input, self.try_to_date_only(input))
    }

    /// UTC instant of reference-zone midnight on a `YYYY-MM-DD` date.
    pub fn try_from_date_only(&self, yyyy_mm_dd: &str) -> Result<DateTime<Utc>> {
        let date = parse_date(yyyy_mm_dd)?;
        let midnight = local_to_zone(date.and_time(NaiveTime::MIN), self.zone)?;
        Ok(midnight.with_timezone(&Utc))
    }

    pub fn from_date_only(&self, yyyy_mm_dd: &str) -> String {
        lenient(
            yyyy_mm_dd,
            self.try_from_date_only(yyyy_mm_dd)
                .map(|dt| format_rfc3339_utc(&dt)),
        )
    }

    /// Compose a slot time with a calendar date into one instant.
    ///
    /// `base_date` may be any accepted input; only its reference-zone date
    /// is used. Missing or empty means today. `time_of_day` is normalized
    /// with [`normalize_time_of_day`]. The result's reference-zone date and
    /// time equal the inputs, whatever zone the host runs in.
    pub fn try_compose_scheduled_instant(
        &self,
        time_of_day: &str,
        base_date: Option<&str>,
    ) -> Result<DateTime<Tz>> {
        let time = normalize_time_of_day(time_of_day)?;
        let date = match base_date.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) => self.resolve(base)?.date_naive(),
            None => self.today(),
        };

        local_to_zone(date.and_time(time), self.zone)
    }

    /// Display form of [`Self::try_compose_scheduled_instant`].
    pub fn compose_scheduled_instant(&self, time_of_day: &str, base_date: Option<&str>) -> String {
        lenient(
            time_of_day,
            self.try_compose_scheduled_instant(time_of_day, base_date)
                .map(|dt| format_rfc3339(&dt)),
        )
    }

    /// Reference-zone time of day as `HH:mm`.
    pub fn try_to_time_of_day(&self, input: &str) -> Result<String> {
        self.resolve(input).map(|dt| format_time_of_day(&dt))
    }

    pub fn to_time_of_day_display(&self, input: &str) -> String {
        lenient(input, self.try_to_time_of_day(input))
    }

    /// Render in the reference zone with a strftime pattern.
    pub fn try_format_in_zone(&self, input: &str, pattern: &str) -> Result<String> {
        let dt = self.resolve(input)?;
        format_with_pattern(&dt, pattern)
    }

    pub fn format_in_zone(&self, input: &str, pattern: &str) -> String {
        lenient(input, self.try_format_in_zone(input, pattern))
    }

    /// Reference-zone midnight of the resolved instant's day.
    pub fn try_start_of_day(&self, input: &str) -> Result<DateTime<Tz>> {
        let date = self.resolve(input)?.date_naive();
        local_to_zone(date.and_time(NaiveTime::MIN), self.zone)
    }

    pub fn start_of_day(&self, input: &str) -> String {
        lenient(input, self.try_start_of_day(input).map(|dt| format_rfc3339(&dt)))
    }

    /// Last whole second of the resolved instant's reference-zone day.
    pub fn try_end_of_day(&self, input: &str) -> Result<DateTime<Tz>> {
        let date = self.resolve(input)?.date_naive();
        let last_second = NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| SlotZoneError::OutOfRange("23:59:59".to_string()))?;
        local_to_zone(date.and_time(last_second), self.zone)
    }

    pub fn end_of_day(&self, input: &str) -> String {
        lenient(input, self.try_end_of_day(input).map(|dt| format_rfc3339(&dt)))
    }

    /// Apply `conversion` and format its result.
    pub fn convert(&self, input: &str, conversion: Conversion) -> Result<String> {
        match conversion {
            Conversion::Local => self.try_to_local_display(input),
            Conversion::Utc => self.try_to_utc(input).map(|dt| format_rfc3339_utc(&dt)),
            Conversion::Date => self.try_to_date_only(input),
            Conversion::FromDate => self
                .try_from_date_only(input)
                .map(|dt| format_rfc3339_utc(&dt)),
            Conversion::Time => self.try_to_time_of_day(input),
        }
    }

    /// Display form of [`Self::convert`].
    pub fn convert_lenient(&self, input: &str, conversion: Conversion) -> String {
        lenient(input, self.convert(input, conversion))
    }
}

fn lenient(input: &str, result: Result<String>) -> String {
    match result {
        Ok(output) => output,
        Err(SlotZoneError::EmptyInput) => String::new(),
        Err(_) => input.to_string(),
    }
}
