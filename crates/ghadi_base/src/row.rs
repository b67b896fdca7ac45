//! Flat, display-ready records for tables and exports.

use ghadi_time::{format_clock, format_date};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleSegment;

/// One schedule line as shown to users.
///
/// Serialized field names match the column headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// `dd/mm/YYYY`
    #[serde(rename = "Date")]
    pub date: String,
    /// English weekday name.
    #[serde(rename = "Week")]
    pub weekday: String,
    #[serde(rename = "Batch")]
    pub batch: String,
    #[serde(rename = "Ghadi No")]
    pub index: u32,
    /// `HH:MM:SS`
    #[serde(rename = "Start Time")]
    pub start_time: String,
    /// `HH:MM:SS`
    #[serde(rename = "End Time")]
    pub end_time: String,
}

/// Column headings in display order.
pub const ROW_HEADERS: [&str; 6] = ["Date", "Week", "Batch", "Ghadi No", "Start Time", "End Time"];

impl ScheduleRow {
    pub fn from_segment(segment: &ScheduleSegment) -> Self {
        Self {
            date: format_date(segment.date),
            weekday: segment.vaar.english_name().to_string(),
            batch: segment.batch.name().to_string(),
            index: segment.index,
            start_time: format_clock(segment.start_clock()),
            end_time: format_clock(segment.end_clock()),
        }
    }

    /// Cell values in [`ROW_HEADERS`] order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.date.clone(),
            self.weekday.clone(),
            self.batch.clone(),
            self.index.to_string(),
            self.start_time.clone(),
            self.end_time.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Batch, LabelPolicy, build_schedule};
    use chrono::{NaiveDate, NaiveTime};
    use ghadi_time::{ReferenceZone, TimeInterval};

    fn morning_rows() -> Vec<ScheduleRow> {
        let z = ReferenceZone::default();
        let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let iv = TimeInterval::new(
            z.localize(d, NaiveTime::from_hms_opt(6, 0, 0).unwrap()).unwrap(),
            z.localize(d, NaiveTime::from_hms_opt(18, 0, 0).unwrap()).unwrap(),
        )
        .unwrap();
        build_schedule(&iv, 30, Batch::Morning, LabelPolicy::Rollover)
            .unwrap()
            .rows()
    }

    #[test]
    fn first_row_fields() {
        let rows = morning_rows();
        assert_eq!(
            rows[0],
            ScheduleRow {
                date: "15/01/2024".into(),
                weekday: "Monday".into(),
                batch: "Morning".into(),
                index: 1,
                start_time: "06:00:00".into(),
                end_time: "06:24:00".into(),
            }
        );
        assert_eq!(rows[29].end_time, "18:00:00");
    }

    #[test]
    fn json_uses_column_names() {
        let rows = morning_rows();
        let v = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(v["Ghadi No"], 1);
        assert_eq!(v["Start Time"], "06:00:00");
        assert_eq!(v["Week"], "Monday");
    }

    #[test]
    fn cells_follow_headers() {
        let cells = morning_rows()[1].cells();
        assert_eq!(cells[3], "2");
        assert_eq!(cells[4], "06:24:00");
        assert_eq!(cells.len(), ROW_HEADERS.len());
    }
}
