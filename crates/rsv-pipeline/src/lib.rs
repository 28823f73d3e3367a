//! Reservation view pipeline.
//!
//! Turns the raw remote payload into the rows the dashboard shows. Every stage
//! is a pure function over in-memory collections:
//!
//! ```text
//! raw records ─▶ normalize ─▶ sort ─▶ date filter ─▶ (caller) text search
//! ```
//!
//! - [`normalize`]: validate raw records, drop incomplete rows
//! - [`compare`]: total order per field and direction, stable sort
//! - [`date_filter`]: calendar-day equality in the viewer zone
//! - [`search`]: case-insensitive substring search across all fields
//! - [`BookingView`]: holds sort and date state, derives the current view
//! - [`stats`]: summary counts and per-field aggregates
//!
//! # Example
//!
//! ```
//! use rsv_model::{ReservationField, ViewerZone};
//! use rsv_pipeline::{BookingView, search};
//! use serde_json::json;
//!
//! let raw = vec![
//!     json!({"日付": "2024-01-05T10:00", "店舗": "B店", "キャスト": "X", "名前": "Taro", "電話番号": "090-1"}),
//!     json!({"日付": "2024-01-06T10:00", "店舗": "A店", "キャスト": "Y", "名前": "Hanako", "電話番号": "080-2"}),
//! ];
//!
//! let mut view = BookingView::from_raw(&raw, ViewerZone::utc());
//! view.set_sort_key(ReservationField::Store);
//!
//! let rows = view.current_view();
//! assert_eq!(rows[0].store, "A店");
//! assert_eq!(search(&rows, "taro").len(), 1);
//! ```

pub mod compare;
pub mod date_filter;
pub mod normalize;
pub mod search;
pub mod stats;
mod view;

pub use compare::{compare, sort_reservations};
pub use date_filter::{filter_by_day, parse_filter_date};
pub use normalize::{NormalizeReport, normalize_record, normalize_records};
pub use search::{matches_term, search};
pub use stats::{DailyCount, ViewSummary, count_by, daily_counts};
pub use view::BookingView;
