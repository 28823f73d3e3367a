//! Reservation data model.
//!
//! This crate provides the canonical types shared by the reservation board
//! crates:
//!
//! - [`Reservation`]: one appointment record with its seven canonical fields
//! - [`ReservationField`]: the field enum used for sorting, search and labels
//! - [`ReservationDate`]: raw date text plus its parsed local timestamp
//! - [`ViewerZone`]: the viewer's local time zone used for calendar-day logic
//! - [`SortState`]: the sort key/direction toggle
//! - [`display`]: date formatting for the table and card views
//!
//! # Example
//!
//! ```
//! use rsv_model::{ReservationDate, ViewerZone};
//!
//! let zone = ViewerZone::utc();
//! let date = ReservationDate::parse("2024-01-05T10:00", zone);
//! assert_eq!(date.calendar_day().map(|d| d.to_string()), Some("2024-01-05".to_string()));
//! ```

pub mod date;
pub mod display;
mod field;
mod reservation;
mod sort;

pub use date::{ReservationDate, ViewerZone, parse_timestamp, timestamp_from_millis};
pub use display::Recency;
pub use field::ReservationField;
pub use reservation::{RawRecord, Reservation};
pub use sort::{SortDirection, SortState};
