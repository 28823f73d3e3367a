//! Sorted, date-filtered view over the normalized records.

use chrono::NaiveDate;
use rsv_model::{RawRecord, Reservation, ReservationField, SortState, ViewerZone};

use crate::compare::sort_reservations;
use crate::date_filter::{filter_by_day, parse_filter_date};
use crate::normalize::{NormalizeReport, normalize_records};

/// Normalized records plus the sort and date-filter state applied to them.
///
/// The view is derived on demand: normalize once, then sort a copy and apply
/// the date filter. The stored records are never reordered, so a sort change
/// always starts from the normalized order.
#[derive(Debug, Clone, Default)]
pub struct BookingView {
    records: Vec<Reservation>,
    sort: SortState,
    date_filter: Option<NaiveDate>,
    zone: ViewerZone,
}

impl BookingView {
    /// Empty view for a viewer zone.
    #[must_use]
    pub fn new(zone: ViewerZone) -> Self {
        Self {
            records: Vec::new(),
            sort: SortState::new(),
            date_filter: None,
            zone,
        }
    }

    /// View over a raw payload.
    #[must_use]
    pub fn from_raw(raw: &[RawRecord], zone: ViewerZone) -> Self {
        let mut view = Self::new(zone);
        view.replace_records(raw);
        view
    }

    /// Replace the record set with a newly fetched payload.
    ///
    /// Sort and date-filter state are kept.
    pub fn replace_records(&mut self, raw: &[RawRecord]) -> NormalizeReport {
        let (records, report) = normalize_records(raw, self.zone);
        self.records = records;
        report
    }

    /// Drop all records, keeping sort and filter state.
    pub fn clear_records(&mut self) {
        self.records.clear();
    }

    /// Normalized records in payload order.
    #[must_use]
    pub fn records(&self) -> &[Reservation] {
        &self.records
    }

    /// Select a sort key (see [`SortState::toggle`]).
    pub fn set_sort_key(&mut self, field: ReservationField) {
        self.sort.toggle(field);
        tracing::debug!(
            key = %field,
            direction = ?self.sort.direction(),
            "Sort key changed"
        );
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_date_filter(&mut self, day: NaiveDate) {
        self.date_filter = Some(day);
        tracing::debug!(day = %day, "Date filter set");
    }

    /// Set the date filter from picker input.
    ///
    /// Unparseable input leaves the current filter unchanged and returns
    /// `None`.
    pub fn apply_date_input(&mut self, input: &str) -> Option<NaiveDate> {
        let Some(day) = parse_filter_date(input, self.zone) else {
            tracing::debug!(input, "Ignoring unparseable date filter input");
            return None;
        };
        self.set_date_filter(day);
        Some(day)
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
    }

    #[must_use]
    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.date_filter
    }

    #[must_use]
    pub fn zone(&self) -> ViewerZone {
        self.zone
    }

    /// Sorted then date-filtered records.
    ///
    /// Calling this twice without a state change yields the same sequence.
    #[must_use]
    pub fn current_view(&self) -> Vec<Reservation> {
        let mut records = self.records.clone();
        sort_reservations(&mut records, &self.sort);
        filter_by_day(records, self.date_filter)
    }
}
