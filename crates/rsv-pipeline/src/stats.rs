//! Summary counts and aggregates over a set of reservations.

use std::collections::HashMap;

use chrono::{NaiveDate, TimeDelta};
use rsv_model::{Reservation, ReservationField};
use serde::Serialize;

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewSummary {
    /// Records in the set.
    pub total: usize,
    /// Records whose local calendar day is `today`.
    pub today: usize,
}

impl ViewSummary {
    #[must_use]
    pub fn compute(records: &[Reservation], today: NaiveDate) -> Self {
        Self {
            total: records.len(),
            today: records
                .iter()
                .filter(|record| record.date.calendar_day() == Some(today))
                .count(),
        }
    }
}

/// Count records per distinct value of `field`.
///
/// Ordered by count descending, ties by value ascending. Records with the
/// field absent are skipped.
#[must_use]
pub fn count_by(records: &[Reservation], field: ReservationField) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in records.iter().filter_map(|record| record.text(field)) {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Reservations on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: usize,
}

/// Per-day counts for the `days` days ending at `today`, oldest first.
///
/// Days without reservations are included with a zero count.
#[must_use]
pub fn daily_counts(records: &[Reservation], today: NaiveDate, days: u32) -> Vec<DailyCount> {
    (0..i64::from(days))
        .rev()
        .filter_map(|offset| today.checked_sub_signed(TimeDelta::days(offset)))
        .map(|day| DailyCount {
            day,
            count: records
                .iter()
                .filter(|record| record.date.calendar_day() == Some(day))
                .count(),
        })
        .collect()
}
