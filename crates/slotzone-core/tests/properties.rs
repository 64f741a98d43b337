use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use slotzone_core::{FixedClock, Normalizer};

fn normalizer() -> Normalizer<FixedClock> {
    let now = Utc
        .with_ymd_and_hms(2025, 7, 23, 20, 0, 0)
        .single()
        .unwrap();
    Normalizer::default().with_clock(FixedClock::new(now))
}

proptest! {
    #[test]
    fn utc_local_utc_is_stable(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let n = normalizer();
        let wall = format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}");

        let utc = n.try_to_utc(&wall).unwrap().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let local = n.try_to_local_display(&utc).unwrap();
        let again = n.to_utc_for_transmission(&local);

        prop_assert_eq!(again, utc);
        prop_assert_eq!(local, format!("{wall}+05:00"));
    }

    #[test]
    fn composition_keeps_date_and_time(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let n = normalizer();
        let date = format!("{year:04}-{month:02}-{day:02}");
        let time = format!("{hour:02}:{minute:02}");

        let scheduled = n.compose_scheduled_instant(&time, Some(&date));
        let sent = n.to_utc_for_transmission(&scheduled);

        prop_assert_eq!(n.to_time_of_day_display(&scheduled), time.clone());
        prop_assert_eq!(n.to_date_only(&scheduled), date.clone());
        prop_assert_eq!(n.to_time_of_day_display(&sent), time);
        prop_assert_eq!(n.to_date_only(&sent), date);
    }

    #[test]
    fn separator_free_time_matches(hour in 0u32..24, minute in 0u32..60) {
        let n = normalizer();
        let base = Some("2025-07-23");

        prop_assert_eq!(
            n.compose_scheduled_instant(&format!("{hour:02}{minute:02}"), base),
            n.compose_scheduled_instant(&format!("{hour:02}:{minute:02}"), base)
        );
    }

    #[test]
    fn legacy_payload_shows_clock_face(
        hour in 0u32..24,
        minute in 0u32..60,
        millis in 0u32..1000,
    ) {
        let n = normalizer();
        let payload = format!("1970-01-01T{hour:02}:{minute:02}:00.{millis:03}Z");

        prop_assert_eq!(n.to_time_of_day_display(&payload), format!("{hour:02}:{minute:02}"));
        prop_assert!(!n.to_local_display(&payload).contains("1970"));
    }

    #[test]
    fn display_never_panics(input in ".{0,40}") {
        let n = normalizer();
        let _ = n.to_local_display(&input);
        let _ = n.to_utc_for_transmission(&input);
        let _ = n.to_date_only(&input);
        let _ = n.from_date_only(&input);
        let _ = n.compose_scheduled_instant(&input, None);
        let _ = n.to_time_of_day_display(&input);
    }
}

#[test]
fn empty_inputs_are_empty() {
    let n = normalizer();
    assert_eq!(n.to_local_display(""), "");
    assert_eq!(n.compose_scheduled_instant("", None), "");
    assert_eq!(n.to_time_of_day_display(""), "");
}

#[test]
fn backend_echo_renders_picked_slot() {
    let n = normalizer();
    let scheduled = n.compose_scheduled_instant("14:30", Some("2025-07-23"));
    assert_eq!(scheduled, "2025-07-23T14:30:00+05:00");
    assert_eq!(n.to_time_of_day_display("2025-07-23T09:30:00Z"), "14:30");
}
