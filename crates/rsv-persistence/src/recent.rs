//! Recent-search history.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::{load_json, save_json};

/// File name of the recent-search store.
pub const RECENT_SEARCHES_FILE: &str = "searchHistory.json";

/// Number of search terms kept.
pub const DEFAULT_MAX_RECENT: usize = 5;

/// Most-recent-first list of submitted search terms, backed by a JSON file.
///
/// Read once on [`open`](Self::open) and rewritten in full on every change.
#[derive(Debug, Clone)]
pub struct RecentSearches {
    path: PathBuf,
    entries: Vec<String>,
    max_recent: usize,
}

impl RecentSearches {
    /// Open the store at `path` with the default limit.
    ///
    /// Never fails: a missing file is an empty history, and an unreadable or
    /// corrupt file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_limit(path, DEFAULT_MAX_RECENT)
    }

    /// Open the store at `path` keeping at most `max_recent` terms.
    pub fn open_with_limit(path: impl Into<PathBuf>, max_recent: usize) -> Self {
        let path = path.into();
        let mut entries = match load_json::<Vec<String>>(&path) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Ignoring unreadable recent-search file"
                );
                Vec::new()
            }
        };
        entries.truncate(max_recent);

        Self {
            path,
            entries,
            max_recent,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored terms, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn max_recent(&self) -> usize {
        self.max_recent
    }

    /// Move `term` to the front of the in-memory list.
    ///
    /// Blank terms are ignored and return `false`. The term is stored exactly
    /// as given; only the blank check trims.
    pub fn remember(&mut self, term: &str) -> bool {
        if term.trim().is_empty() {
            return false;
        }

        if let Some(idx) = self.entries.iter().position(|entry| entry == term) {
            self.entries.remove(idx);
        }
        self.entries.insert(0, term.to_string());
        self.entries.truncate(self.max_recent);
        true
    }

    /// Write the current list to disk.
    pub fn save(&self) -> Result<()> {
        save_json(&self.entries, &self.path)?;
        tracing::info!(
            path = %self.path.display(),
            count = self.entries.len(),
            "Saved recent searches"
        );
        Ok(())
    }

    /// Remember `term` and persist the list.
    ///
    /// Returns `Ok(false)` without writing when the term is blank. On a write
    /// failure the in-memory list keeps the new term.
    pub fn record(&mut self, term: &str) -> Result<bool> {
        if !self.remember(term) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Forget every stored term.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }
}
