//! Calendar-day filtering.
//!
//! A record matches a target day when its local date (viewer zone) has the
//! same year, month and day. Time of day is ignored. Unparseable dates never
//! match while a filter is active.

use chrono::NaiveDate;
use rsv_model::{Reservation, ViewerZone, parse_timestamp};

/// Whether a reservation falls on the given local calendar day.
#[must_use]
pub fn matches_day(record: &Reservation, day: NaiveDate) -> bool {
    record.date.calendar_day() == Some(day)
}

/// Keep only records on `day`. `None` keeps everything.
#[must_use]
pub fn filter_by_day(records: Vec<Reservation>, day: Option<NaiveDate>) -> Vec<Reservation> {
    match day {
        None => records,
        Some(day) => records
            .into_iter()
            .filter(|record| matches_day(record, day))
            .collect(),
    }
}

/// Turn date-picker input into a calendar day.
///
/// Accepts both date-only values and full timestamps, so every widget ends up
/// with the same calendar-day filter.
#[must_use]
pub fn parse_filter_date(input: &str, zone: ViewerZone) -> Option<NaiveDate> {
    parse_timestamp(input, zone).map(|dt| dt.date())
}
