//! # slotzone-core
//!
//! Reference-zone wall-clock normalization for slot bookings.
//!
//! Booking a refueling slot means turning "the user picked date X and slot
//! Y" into one absolute instant, and rendering instants from the backend
//! back as local dates and times. All of that happens in a single reference
//! zone (Asia/Tashkent by default) regardless of where the code runs.
//!
//! ## Features
//!
//! - **Explicit zone**: the reference zone is a [`Normalizer`] field, not a
//!   global. Any IANA zone from chrono-tz can be substituted.
//! - **Drift-free composition**: a composed instant's reference-zone date
//!   and time always equal the picked date and time.
//! - **Explicit bare-input policy**: offset-less strings are read as
//!   reference wall clock or as UTC, per [`BareInputPolicy`].
//! - **Legacy payloads**: epoch-anchored time-only values
//!   (`1970-01-01T13:00:00Z`) are recognized in one place, [`legacy`].
//! - **Display-safe API**: every operation has a non-failing form for
//!   rendering code next to a strict `try_*` form.
//!
//! ## Example
//!
//! ```rust
//! use slotzone_core::prelude::*;
//!
//! let normalizer = Normalizer::new(parse_tz("Asia/Tashkent").unwrap());
//!
//! // User picked 2025-07-23 and the 14:30 slot
//! let scheduled = normalizer.compose_scheduled_instant("14:30", Some("2025-07-23"));
//! assert_eq!(scheduled, "2025-07-23T14:30:00+05:00");
//!
//! // Backend echoes it back as UTC
//! let echoed = normalizer.to_utc_for_transmission(&scheduled);
//! assert_eq!(echoed, "2025-07-23T09:30:00Z");
//! assert_eq!(normalizer.to_time_of_day_display(&echoed), "14:30");
//! ```

pub mod booking;
pub mod clock;
pub mod error;
pub mod legacy;
pub mod models;
pub mod normalize;
pub mod parse;
pub mod tz;

// Re-export commonly used types at the crate root
pub use booking::{ScheduledSlot, TimeSlot, TimeSlotsResponse, schedule_slot, schedule_slots};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SlotZoneError};
pub use models::{BareInputPolicy, Conversion, ConversionResult, InputKind};
pub use normalize::Normalizer;
pub use tz::REFERENCE_ZONE;

/// Prelude module for convenient imports.
///
/// ```
/// use slotzone_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::booking::{schedule_slot, schedule_slots};
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{Result, SlotZoneError};
    pub use crate::models::*;
    pub use crate::normalize::Normalizer;
    pub use crate::tz::{REFERENCE_ZONE, parse_tz};
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn full_workflow_booking() {
        let now = Utc
            .with_ymd_and_hms(2025, 7, 22, 12, 0, 0)
            .single()
            .unwrap();
        let normalizer = Normalizer::default().with_clock(FixedClock::new(now));

        let slot_label = normalizer.to_time_of_day_display("1970-01-01T14:30:00.000Z");
        assert_eq!(slot_label, "14:30");

        let scheduled = normalizer.compose_scheduled_instant(&slot_label, Some("2025-07-23"));
        assert_eq!(scheduled, "2025-07-23T14:30:00+05:00");

        let sent = normalizer.to_utc_for_transmission(&scheduled);
        assert_eq!(sent, "2025-07-23T09:30:00Z");
        assert_eq!(normalizer.to_local_display(&sent), scheduled);
    }

    #[test]
    fn reference_zone_is_tashkent() {
        assert_eq!(REFERENCE_ZONE.to_string(), "Asia/Tashkent");
        assert_eq!(Normalizer::default().zone(), REFERENCE_ZONE);
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _tz = parse_tz("UTC").unwrap();
        let _policy = BareInputPolicy::Utc;
        let _conversion = Conversion::Local;
    }
}
