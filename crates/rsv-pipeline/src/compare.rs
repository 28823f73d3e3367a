//! Field comparison and stable sorting.
//!
//! Text compares lexicographically on the raw value, absent optional fields
//! as the empty string. Dates compare chronologically; parsed dates order
//! before unparseable ones, which fall back to their raw text.

use std::cmp::Ordering;

use rsv_model::{Reservation, ReservationDate, ReservationField, SortDirection, SortState};

/// Compare two reservations by one field in the given direction.
///
/// Descending is exactly the reverse of ascending.
#[must_use]
pub fn compare(
    a: &Reservation,
    b: &Reservation,
    key: ReservationField,
    direction: SortDirection,
) -> Ordering {
    direction.apply(compare_ascending(a, b, key))
}

fn compare_ascending(a: &Reservation, b: &Reservation, key: ReservationField) -> Ordering {
    match key {
        ReservationField::Date => compare_dates(&a.date, &b.date),
        field => a
            .text(field)
            .unwrap_or_default()
            .cmp(b.text(field).unwrap_or_default()),
    }
}

/// Chronological order, unparseable dates last.
#[must_use]
pub fn compare_dates(a: &ReservationDate, b: &ReservationDate) -> Ordering {
    match (a.local(), b.local()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.raw().cmp(b.raw()),
    }
}

/// Sort in place by the current sort state. Unsorted state leaves the input
/// order untouched. The sort is stable.
pub fn sort_reservations(records: &mut [Reservation], state: &SortState) {
    let Some(key) = state.key() else {
        return;
    };
    let direction = state.direction();
    records.sort_by(|a, b| compare(a, b, key, direction));
}
