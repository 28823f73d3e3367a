//! Reservation dashboard session.
//!
//! Ties the pieces together: [`rsv_fetch`] loads the raw records,
//! [`rsv_pipeline`] derives the visible rows, and [`rsv_persistence`] keeps
//! the recent-search list. [`Settings`] and [`logging`] provide the ambient
//! configuration.

pub mod logging;
mod session;
pub mod settings;
mod status;

pub use session::DashboardSession;
pub use settings::{Settings, SettingsError};
pub use status::ViewStatus;
