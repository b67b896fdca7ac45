//! Finding the ghadi that is running at a given instant.
//!
//! Matching uses only the wall-clock start/end of each segment, placed on
//! the calendar date of `now`. A segment whose end clock is not after its
//! start clock is taken to cross midnight, and its end moves to the next
//! day. Both boundaries are inclusive, so at a shared boundary two adjacent
//! segments are active at once; [`locate`] reports the earlier one.
//!
//! Segments of a night schedule that start after midnight are therefore only
//! matched when `now` is on their own calendar date, and segments before
//! midnight only when `now` is on theirs. No further date disambiguation is
//! attempted.

use chrono::{Days, NaiveDate, NaiveTime, TimeZone};
use ghadi_time::Instant;

use crate::schedule::{Schedule, ScheduleSegment};

/// Whether `segment` is running at `now`.
pub fn is_active(segment: &ScheduleSegment, now: &Instant) -> bool {
    let tz = segment.start.timezone();
    let now = now.with_timezone(&tz);
    let day = now.date_naive();

    let start_clock = segment.start_clock();
    let end_clock = segment.end_clock();
    let Some(start) = on_day(&tz, day, start_clock) else {
        return false;
    };
    let Some(mut end) = on_day(&tz, day, end_clock) else {
        return false;
    };
    if end_clock <= start_clock {
        match end.checked_add_days(Days::new(1)) {
            Some(next) => end = next,
            None => return false,
        }
    }
    start <= now && now <= end
}

fn on_day(tz: &chrono_tz::Tz, day: NaiveDate, clock: NaiveTime) -> Option<Instant> {
    tz.from_local_datetime(&day.and_time(clock)).single()
}

/// 1-based index of the first segment running at `now`, if any.
pub fn locate(schedule: &Schedule, now: &Instant) -> Option<u32> {
    schedule
        .iter()
        .find(|seg| is_active(seg, now))
        .map(|seg| seg.index)
}

/// One flag per segment, in schedule order, marking the running ghadi(s).
pub fn active_flags(schedule: &Schedule, now: &Instant) -> Vec<bool> {
    schedule.iter().map(|seg| is_active(seg, now)).collect()
}
