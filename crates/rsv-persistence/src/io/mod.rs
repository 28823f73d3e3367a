//! JSON file I/O.
//!
//! This module handles:
//! - Saving with atomic writes (temp file + rename)
//! - Loading with format validation

mod load;
mod save;

pub use load::load_json;
pub use save::{save_json, write_atomic};
