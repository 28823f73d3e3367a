//! Date formatting for the table and card views.
//!
//! All formatters return [`INVALID_DATE`] for a date that could not be parsed
//! and an empty string for an empty one.

use chrono::{Datelike, NaiveDateTime};

use crate::date::ReservationDate;

/// Placeholder shown for unparseable dates.
pub const INVALID_DATE: &str = "無効な日付";

/// Weekday characters, Sunday first.
const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Badge shown next to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recency {
    /// Same local calendar day as now.
    Today,
    /// In the past, less than seven days ago.
    ThisWeek,
}

impl Recency {
    /// Badge label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "今日",
            Self::ThisWeek => "今週",
        }
    }
}

fn with_local(date: &ReservationDate, format: impl FnOnce(NaiveDateTime) -> String) -> String {
    if date.raw().is_empty() {
        return String::new();
    }
    match date.local() {
        Some(local) => format(local),
        None => INVALID_DATE.to_string(),
    }
}

/// `YYYY/MM/DD HH:MM`
#[must_use]
pub fn format_short(date: &ReservationDate) -> String {
    with_local(date, |dt| dt.format("%Y/%m/%d %H:%M").to_string())
}

/// `YYYY/MM/DD HH:MM:SS`
#[must_use]
pub fn format_with_seconds(date: &ReservationDate) -> String {
    with_local(date, |dt| dt.format("%Y/%m/%d %H:%M:%S").to_string())
}

/// `YYYY/MM/DD(曜) HH:MM`
#[must_use]
pub fn format_with_weekday(date: &ReservationDate) -> String {
    with_local(date, |dt| {
        let weekday = WEEKDAYS[dt.weekday().num_days_from_sunday() as usize];
        format!(
            "{}({}) {}",
            dt.format("%Y/%m/%d"),
            weekday,
            dt.format("%H:%M")
        )
    })
}

/// Relative time ("3分前", "2時間前"), falling back to [`format_short`]
/// after a week.
#[must_use]
pub fn format_relative(date: &ReservationDate, now: NaiveDateTime) -> String {
    with_local(date, |dt| {
        let elapsed = now.signed_duration_since(dt);
        let minutes = elapsed.num_minutes();
        let hours = elapsed.num_hours();
        let days = elapsed.num_days();

        if minutes < 1 {
            "たった今".to_string()
        } else if minutes < 60 {
            format!("{minutes}分前")
        } else if hours < 24 {
            format!("{hours}時間前")
        } else if days < 7 {
            format!("{days}日前")
        } else {
            dt.format("%Y/%m/%d %H:%M").to_string()
        }
    })
}

/// Badge classification relative to `now`.
#[must_use]
pub fn recency(date: &ReservationDate, now: NaiveDateTime) -> Option<Recency> {
    let local = date.local()?;
    if local.date() == now.date() {
        return Some(Recency::Today);
    }
    let elapsed = now.signed_duration_since(local);
    if elapsed > chrono::TimeDelta::zero() && elapsed.num_days() < 7 {
        Some(Recency::ThisWeek)
    } else {
        None
    }
}
