//! Wall-clock inputs that a zone transition skips or repeats.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use ghadi_time::{ClockTime, ReferenceZone, TimeError, TimeInterval, next_calendar_day};

fn new_york() -> ReferenceZone {
    ReferenceZone::from_name("America/New_York").unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn skipped_local_time_is_rejected() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    assert!(matches!(
        new_york().localize(date, hm(2, 30)),
        Err(TimeError::NonexistentLocalTime(_))
    ));
}

#[test]
fn repeated_local_time_is_rejected() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
    assert!(matches!(
        new_york().localize(date, hm(1, 30)),
        Err(TimeError::NonexistentLocalTime(_))
    ));
}

#[test]
fn calendar_day_across_transition_is_23_hours() {
    let zone = new_york();
    let sunrise = zone
        .localize(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), hm(6, 30))
        .unwrap();
    let next = next_calendar_day(&sunrise).unwrap();
    assert_eq!(next - sunrise, TimeDelta::hours(23));
}

#[test]
fn kolkata_day_from_clock_strings() {
    let zone = ReferenceZone::default();
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let rise: ClockTime = "6:05".parse().unwrap();
    let set: ClockTime = "17:55".parse().unwrap();
    let iv = TimeInterval::new(
        zone.localize(date, rise.to_naive_time()).unwrap(),
        zone.localize(date, set.to_naive_time()).unwrap(),
    )
    .unwrap();
    assert_eq!(iv.duration(), TimeDelta::minutes(11 * 60 + 50));
}
