//! Remote fetch for the reservation dashboard.
//!
//! The remote source is a single HTTP endpoint returning a JSON array of raw
//! records. [`FetchController`] tracks which request is current so that a slow
//! response to an old request can never overwrite a newer one.
//!
//! ```
//! use rsv_fetch::{Completion, FetchController, FetchState};
//! use serde_json::json;
//!
//! let mut controller = FetchController::new();
//! let first = controller.begin("https://a.example/bookings");
//! let second = controller.begin("https://b.example/bookings");
//!
//! assert_eq!(controller.complete(&second, Ok(vec![json!({})])), Completion::Applied);
//! assert_eq!(controller.complete(&first, Ok(vec![])), Completion::Stale);
//! assert!(matches!(controller.state(), FetchState::Ready(records) if records.len() == 1));
//! ```

mod controller;
mod error;
mod source;

pub use controller::{Completion, FetchController, FetchState, RequestId, RequestTicket};
pub use error::{FetchError, Result};
pub use source::{
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, HttpRecordSource, RecordSource, SourceConfig,
    parse_records,
};
