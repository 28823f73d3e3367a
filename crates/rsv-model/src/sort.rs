//! Sort key and direction state.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::field::ReservationField;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending ordering.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current sort key and direction.
///
/// Starts unsorted. Once a key has been chosen there is no way back to the
/// unsorted state; selecting the same key only flips the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    key: Option<ReservationField>,
    direction: SortDirection,
}

impl SortState {
    /// Unsorted, ascending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }

    /// Current sort key.
    #[must_use]
    pub const fn key(&self) -> Option<ReservationField> {
        self.key
    }

    /// Current direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Select a sort key.
    ///
    /// A new key resets to ascending; the current key flips direction.
    pub fn toggle(&mut self, field: ReservationField) {
        if self.key == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Header indicator for a column: `↕` when not sorted by it.
    #[must_use]
    pub fn indicator(&self, field: ReservationField) -> &'static str {
        match (self.key == Some(field), self.direction) {
            (false, _) => "↕",
            (true, SortDirection::Ascending) => "↑",
            (true, SortDirection::Descending) => "↓",
        }
    }
}
