//! Local persistence for the reservation dashboard.
//!
//! The only persisted state is the recent-search list: at most five search
//! terms, most recent first, stored as a JSON array of strings.
//!
//! # Example
//!
//! ```
//! use rsv_persistence::RecentSearches;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("searchHistory.json");
//!
//! let mut recent = RecentSearches::open(&path);
//! recent.record("090")?;
//! recent.record("田中")?;
//! recent.record("090")?;
//! assert_eq!(recent.entries(), ["090", "田中"]);
//!
//! // Reopening reads what was written
//! assert_eq!(RecentSearches::open(&path).entries(), ["090", "田中"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod io;
mod recent;

pub use error::{PersistenceError, Result};
pub use recent::{DEFAULT_MAX_RECENT, RECENT_SEARCHES_FILE, RecentSearches};
