//! End-to-end tests for ghadi_rs: request in, both schedules out.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use ghadi_rs::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(d: NaiveDate, h: u32, m: u32) -> Instant {
    ReferenceZone::default()
        .localize(d, NaiveTime::from_hms_opt(h, m, 0).unwrap())
        .unwrap()
}

fn twelve_hour_day() -> CalculationResult {
    let request = CalculationRequest::parse(2024, 1, 15, "06:00", "18:00").unwrap();
    calculate(&request).unwrap()
}

const TABLE: &str = r#"
[[entry]]
city = "Hyderabad"
date = "2024-01-15"
sunrise = "06:47:12"
sunset = "18:03:05"

[[entry]]
city = "Hyderabad"
date = "2024-01-16"
sunrise = "06:47:30"
sunset = "18:04:00"
"#;

fn hyderabad() -> AstronomicalSource<SunTable> {
    let city = find_city("hyderabad").unwrap();
    AstronomicalSource::new(SunTable::parse(TABLE).unwrap(), *city)
}

#[test]
fn both_batches_have_thirty_ghadis() {
    let r = twelve_hour_day();
    assert_eq!(r.morning.len(), 30);
    assert_eq!(r.evening.len(), 30);
    assert_eq!(r.morning.batch(), Batch::Morning);
    assert_eq!(r.evening.batch(), Batch::Evening);
    assert_eq!(r.combined_rows().len(), 60);
}

#[test]
fn custom_segment_count() {
    let request = CalculationRequest::parse(2024, 1, 15, "06:00", "18:00")
        .unwrap()
        .with_segments(60);
    let r = calculate(&request).unwrap();
    assert_eq!(r.morning.len(), 60);
    assert_eq!(r.evening.get(60).unwrap().duration(), TimeDelta::minutes(12));
}

#[test]
fn segments_are_contiguous() {
    let r = twelve_hour_day();
    for schedule in [&r.morning, &r.evening] {
        for pair in schedule.segments().windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}

#[test]
fn evening_follows_morning_on_exact_division() {
    let r = twelve_hour_day();
    assert_eq!(r.morning.last().unwrap().end, r.evening.first().unwrap().start);
    assert_eq!(r.evening.first().unwrap().start, r.sunset());
}

#[test]
fn twelve_hour_day_clock_times() {
    let r = twelve_hour_day();
    let first = r.morning.get(1).unwrap();
    assert_eq!(first.duration(), TimeDelta::seconds(1440));
    let row = first.row();
    assert_eq!(row.start_time, "06:00:00");
    assert_eq!(row.end_time, "06:24:00");
    assert_eq!(r.morning.get(30).unwrap().row().end_time, "18:00:00");
    assert_eq!(r.next_sunrise(), at(date(2024, 1, 16), 6, 0));
}

#[test]
fn rows_carry_display_labels() {
    let r = twelve_hour_day();
    let rows = r.combined_rows();
    assert_eq!(rows[0].date, "15/01/2024");
    assert_eq!(rows[0].weekday, "Monday");
    assert_eq!(rows[0].batch, "Morning");
    assert_eq!(rows[30].batch, "Evening");
    assert_eq!(rows[30].index, 1);
    assert_eq!(rows[59].date, "16/01/2024");
    assert_eq!(rows[59].weekday, "Tuesday");
}

#[test]
fn overnight_locate() {
    let r = twelve_hour_day();
    let late = r.locate(&at(date(2024, 1, 15), 23, 0)).unwrap();
    assert_eq!(late.batch, Batch::Evening);
    // 18:00 + 12 * 24 min = 22:48
    assert_eq!(late.index, 13);

    let small_hours = r.locate(&at(date(2024, 1, 16), 2, 10)).unwrap();
    assert_eq!(small_hours.batch, Batch::Evening);
    assert_eq!(small_hours.index, 21);

    let morning = r.locate(&at(date(2024, 1, 15), 6, 30)).unwrap();
    assert_eq!(morning.batch, Batch::Morning);
    assert_eq!(morning.index, 2);
}

#[test]
fn time_outside_schedule_matches_nothing() {
    let r = twelve_hour_day();
    assert_eq!(ghadi_base::locate(&r.morning, &at(date(2024, 1, 15), 3, 0)), None);
    assert_eq!(ghadi_base::locate(&r.evening, &at(date(2024, 1, 15), 12, 0)), None);
}

const ROUNDS_DOWN: &str = r#"
[[entry]]
city = "Pune"
date = "2024-03-04"
sunrise = "06:00:00"
sunset = "18:00:14"

[[entry]]
city = "Pune"
date = "2024-03-05"
sunrise = "06:00:00"
sunset = "18:00:40"
"#;

#[test]
fn instant_between_morning_end_and_sunset_matches_neither_batch() {
    let city = find_city("Pune").unwrap();
    let source = AstronomicalSource::new(SunTable::parse(ROUNDS_DOWN).unwrap(), *city);
    let d = date(2024, 3, 4);
    let r = calculate_from(&source, d, &ScheduleOptions::default()).unwrap();

    // 43214 s / 30 rounds down to 1440 s, so the morning stops 14 s short
    // of sunset and the evening only begins at sunset.
    assert_eq!(r.morning.last().unwrap().row().end_time, "18:00:00");
    assert_eq!(r.evening.first().unwrap().row().start_time, "18:00:14");

    let gap = ReferenceZone::default()
        .localize(d, NaiveTime::from_hms_opt(18, 0, 7).unwrap())
        .unwrap();
    assert_eq!(r.locate(&gap), None);
    assert!(r.active_rows(&gap).iter().all(|(_, on)| !on));
}

#[test]
fn out_of_range_clock_never_reaches_a_schedule() {
    let err = ClockTime::new(30, 75).map_err(GhadiyaluError::from);
    assert!(matches!(err, Err(GhadiyaluError::Time(TimeError::InvalidTimeFormat(_)))));
    let err = ManualSource::parse("30:75", "18:00").map_err(GhadiyaluError::from);
    assert!(matches!(err, Err(GhadiyaluError::Time(TimeError::InvalidTimeFormat(_)))));
}

#[test]
fn active_rows_flag_the_running_ghadi() {
    let r = twelve_hour_day();
    let flagged = r.active_rows(&at(date(2024, 1, 15), 6, 30));
    assert_eq!(flagged.len(), 60);
    let active: Vec<_> = flagged.iter().filter(|(_, on)| *on).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0.index, 2);
    assert_eq!(active[0].0.batch, "Morning");
}

#[test]
fn fixed_evening_labels() {
    let request = CalculationRequest::parse(2024, 1, 15, "06:00", "18:00")
        .unwrap()
        .with_evening_label(EveningLabel::FixedToEveningDate);
    let r = calculate(&request).unwrap();
    let first = r.evening.first().unwrap();
    for seg in &r.evening {
        assert_eq!(seg.date, first.date);
        assert_eq!(seg.vaar, first.vaar);
    }
    assert_eq!(first.vaar, Vaar::Somvaar);
    // Morning labels are never fixed.
    assert_eq!(r.morning.last().unwrap().date, date(2024, 1, 15));
}

#[test]
fn invalid_inputs() {
    assert!(matches!(
        CalculationRequest::parse(2024, 1, 15, "25:99", "18:00"),
        Err(GhadiyaluError::Time(TimeError::InvalidTimeFormat(_)))
    ));
    assert!(matches!(
        CalculationRequest::parse(2024, 2, 30, "06:00", "18:00"),
        Err(GhadiyaluError::Time(TimeError::InvalidDate { .. }))
    ));
}

#[test]
fn sunset_before_sunrise_rolls_to_next_day() {
    let r = calculate(&CalculationRequest::parse(2024, 1, 15, "18:00", "06:00").unwrap()).unwrap();
    assert_eq!(r.sunset(), at(date(2024, 1, 16), 6, 0));
    assert_eq!(r.morning.get(1).unwrap().duration(), TimeDelta::minutes(24));
}

#[test]
fn equal_sunrise_and_sunset_is_rejected() {
    let err = calculate(&CalculationRequest::parse(2024, 1, 15, "06:00", "06:00").unwrap());
    assert!(matches!(err, Err(GhadiyaluError::Time(TimeError::InvalidInterval(_)))));
}

#[test]
fn ephemeris_source_with_inexact_division() {
    let r = calculate_from(&hyderabad(), date(2024, 1, 15), &ScheduleOptions::default()).unwrap();
    // 40553 s / 30 rounds to 1352 s, overshooting sunset by 7 s.
    let sunset = r.sunset();
    assert_eq!(r.morning.last().unwrap().end - sunset, TimeDelta::seconds(7));
    assert_eq!(r.evening.first().unwrap().start, sunset);
    assert_eq!(r.evening.interval().end(), r.next_sunrise());
    assert_eq!(r.sun_line(), "Sunrise: 06:47:12 | Sunset: 18:03:05");
}

#[test]
fn ephemeris_source_missing_date() {
    let err = calculate_from(&hyderabad(), date(2024, 1, 16), &ScheduleOptions::default());
    assert!(matches!(err, Err(GhadiyaluError::Source(_))));
}

#[test]
fn report_serializes_with_column_names() {
    let r = twelve_hour_day();
    let report = r.report(Some(&at(date(2024, 1, 15), 23, 0)));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["date"], "15/01/2024");
    assert_eq!(json["weekday"], "Monday");
    assert_eq!(json["zone"], "Asia/Kolkata");
    assert_eq!(json["morning"][0]["Ghadi No"], 1);
    assert_eq!(json["evening"][0]["Start Time"], "18:00:00");
    assert_eq!(json["active"]["batch"], "Evening");
    assert_eq!(json["active"]["index"], 13);
}
