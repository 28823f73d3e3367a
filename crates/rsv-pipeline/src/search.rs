//! Global text search.
//!
//! A record matches when the lowercase form of any present field contains
//! the lowercase search term. The term is used as-is: no trimming and no
//! splitting into words. An empty term matches everything.

use rsv_model::Reservation;

/// Whether a record contains `term_lower` in any field.
///
/// `term_lower` must already be lowercased.
#[must_use]
pub fn matches_term(record: &Reservation, term_lower: &str) -> bool {
    record
        .field_values()
        .any(|(_, value)| value.to_lowercase().contains(term_lower))
}

/// Filter records by a search term, preserving order.
#[must_use]
pub fn search(records: &[Reservation], term: &str) -> Vec<Reservation> {
    if term.is_empty() {
        return records.to_vec();
    }
    let term_lower = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_term(record, &term_lower))
        .cloned()
        .collect()
}
