//! Booking slot composition.
//!
//! A station's time-slots payload lists slot times in whatever shape the
//! backend produced (full instants, legacy epoch-anchored times, or plain
//! `HH:mm`). Booking a slot means rendering it as a reference-zone `HH:mm`
//! label and composing that label with the date the user picked into the
//! `scheduled_datetime` sent with the order.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::parse::parse_time_of_day;
use crate::tz::format_rfc3339;

/// One bookable slot as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot time, in any accepted input shape.
    pub time: String,
    pub available: bool,
    #[serde(default)]
    pub queue_length: u32,
    #[serde(default)]
    pub unit_id: Option<String>,
}

/// A station's slots for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotsResponse {
    /// The date the slots were requested for (`YYYY-MM-DD`).
    pub date: String,
    pub slots: Vec<TimeSlot>,
}

/// A slot resolved against a selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledSlot {
    /// Reference-zone `HH:mm` label.
    pub label: String,
    /// Composed instant with the reference-zone offset.
    pub scheduled_datetime: String,
    pub available: bool,
    pub queue_length: u32,
    pub unit_id: Option<String>,
}

/// Reference-zone `HH:mm` label for a slot time.
///
/// A plain time-of-day is already wall clock and is taken as-is.
pub fn slot_label<C: Clock>(normalizer: &Normalizer<C>, slot_time: &str) -> Result<String> {
    match parse_time_of_day(slot_time) {
        Some(time) => Ok(time.format("%H:%M").to_string()),
        None => normalizer.try_to_time_of_day(slot_time),
    }
}

/// The `scheduled_datetime` for booking `slot_time` on `selected_date`.
///
/// # Examples
///
/// ```
/// use slotzone_core::Normalizer;
/// use slotzone_core::booking::schedule_slot;
///
/// let normalizer = Normalizer::default();
/// let scheduled = schedule_slot(&normalizer, "2025-07-23T09:30:00Z", "2025-07-25").unwrap();
/// assert_eq!(scheduled, "2025-07-25T14:30:00+05:00");
/// ```
pub fn schedule_slot<C: Clock>(
    normalizer: &Normalizer<C>,
    slot_time: &str,
    selected_date: &str,
) -> Result<String> {
    let label = slot_label(normalizer, slot_time)?;
    normalizer
        .try_compose_scheduled_instant(&label, Some(selected_date))
        .map(|dt| format_rfc3339(&dt))
}

/// Resolve every slot in `response` against `selected_date`, or against
/// the response's own date when none is given.
pub fn schedule_slots<C: Clock>(
    normalizer: &Normalizer<C>,
    response: &TimeSlotsResponse,
    selected_date: Option<&str>,
) -> Result<Vec<ScheduledSlot>> {
    let date = selected_date.unwrap_or(&response.date);

    response
        .slots
        .iter()
        .map(|slot| {
            let label = slot_label(normalizer, &slot.time)?;
            let scheduled_datetime = normalizer
                .try_compose_scheduled_instant(&label, Some(date))
                .map(|dt| format_rfc3339(&dt))?;

            Ok(ScheduledSlot {
                label,
                scheduled_datetime,
                available: slot.available,
                queue_length: slot.queue_length,
                unit_id: slot.unit_id.clone(),
            })
        })
        .collect()
}
