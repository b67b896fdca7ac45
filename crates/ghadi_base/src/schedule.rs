//! Labelled ghadi schedules for the day ("Morning") and night ("Evening") batches.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Timelike};
use ghadi_time::{Instant, TimeInterval};
use serde::{Deserialize, Serialize};

use crate::error::GhadiError;
use crate::partition::partition;
use crate::row::ScheduleRow;
use crate::vaar::Vaar;

/// Which half of the sunrise-to-sunrise day a schedule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Batch {
    /// Sunrise to sunset.
    Morning,
    /// Sunset to next sunrise.
    Evening,
}

impl Batch {
    pub fn name(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How segment dates and weekdays are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Each segment takes the date and weekday of its own start, so labels
    /// change at local midnight.
    Rollover,
    /// Every segment carries the same date and weekday.
    Fixed { date: NaiveDate, vaar: Vaar },
}

impl LabelPolicy {
    /// Fix labels to the calendar date of `instant` in its own zone.
    pub fn fixed_to(instant: &Instant) -> Self {
        Self::Fixed {
            date: instant.date_naive(),
            vaar: Vaar::from_weekday(instant.weekday()),
        }
    }

    fn labels_for(self, cursor: &Instant) -> (NaiveDate, Vaar) {
        match self {
            Self::Rollover => (cursor.date_naive(), Vaar::from_weekday(cursor.weekday())),
            Self::Fixed { date, vaar } => (date, vaar),
        }
    }
}

/// Labelling choice for the evening batch, as requested by callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EveningLabel {
    /// Labels follow each ghadi's own date.
    #[default]
    Rollover,
    /// All evening ghadis show the date and weekday of sunset.
    FixedToEveningDate,
}

impl EveningLabel {
    /// Resolve to a concrete policy for an evening starting at `sunset`.
    pub fn policy_for(self, sunset: &Instant) -> LabelPolicy {
        match self {
            Self::Rollover => LabelPolicy::Rollover,
            Self::FixedToEveningDate => LabelPolicy::fixed_to(sunset),
        }
    }
}

/// One ghadi: a numbered sub-interval with its calendar labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSegment {
    /// 1-based position within the schedule.
    pub index: u32,
    pub start: Instant,
    pub end: Instant,
    /// Display date (see [`LabelPolicy`]).
    pub date: NaiveDate,
    /// Display weekday (see [`LabelPolicy`]).
    pub vaar: Vaar,
    pub batch: Batch,
}

impl ScheduleSegment {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Wall-clock start time, truncated to whole seconds.
    pub fn start_clock(&self) -> NaiveTime {
        whole_seconds(self.start.time())
    }

    /// Wall-clock end time, truncated to whole seconds.
    pub fn end_clock(&self) -> NaiveTime {
        whole_seconds(self.end.time())
    }

    /// Flat display record for this segment.
    pub fn row(&self) -> ScheduleRow {
        ScheduleRow::from_segment(self)
    }
}

fn whole_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// An ordered, contiguous run of ghadis for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    batch: Batch,
    interval: TimeInterval,
    segments: Vec<ScheduleSegment>,
}

impl Schedule {
    pub fn batch(&self) -> Batch {
        self.batch
    }

    /// The interval the schedule was partitioned from.
    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    pub fn segments(&self) -> &[ScheduleSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment by its 1-based index.
    pub fn get(&self, index: u32) -> Option<&ScheduleSegment> {
        let i = usize::try_from(index).ok()?.checked_sub(1)?;
        self.segments.get(i)
    }

    pub fn first(&self) -> Option<&ScheduleSegment> {
        self.segments.first()
    }

    pub fn last(&self) -> Option<&ScheduleSegment> {
        self.segments.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleSegment> {
        self.segments.iter()
    }

    /// Flat display records, one per segment, in order.
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.segments.iter().map(ScheduleSegment::row).collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleSegment;
    type IntoIter = std::slice::Iter<'a, ScheduleSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Partition `interval` into `n` ghadis and label each one.
///
/// The cursor starts at `interval.start()` and advances by the fixed
/// per-segment duration, so `segment[i].end == segment[i + 1].start`.
pub fn build_schedule(
    interval: &TimeInterval,
    n: u32,
    batch: Batch,
    policy: LabelPolicy,
) -> Result<Schedule, GhadiError> {
    let durations = partition(interval, n)?;
    tracing::debug!(
        %batch,
        start = %interval.start(),
        end = %interval.end(),
        segment_seconds = durations.first().map(TimeDelta::num_seconds),
        "building schedule"
    );

    let mut segments = Vec::with_capacity(durations.len());
    let mut cursor = interval.start();
    for (index, duration) in (1..).zip(durations) {
        let end = cursor + duration;
        let (date, vaar) = policy.labels_for(&cursor);
        segments.push(ScheduleSegment {
            index,
            start: cursor,
            end,
            date,
            vaar,
            batch,
        });
        cursor = end;
    }

    Ok(Schedule {
        batch,
        interval: *interval,
        segments,
    })
}
