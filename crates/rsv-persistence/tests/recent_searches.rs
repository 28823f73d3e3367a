//! Recent-search store lifecycle on disk.

use std::fs;

use rsv_persistence::{DEFAULT_MAX_RECENT, RECENT_SEARCHES_FILE, RecentSearches};
use tempfile::tempdir;

#[test]
fn record_persists_most_recent_first() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(RECENT_SEARCHES_FILE);

    let mut recent = RecentSearches::open(&path);
    for term in ["090", "田中", "新宿", "090"] {
        assert!(recent.record(term).unwrap());
    }

    let stored: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored, vec!["090", "新宿", "田中"]);
    assert_eq!(RecentSearches::open(&path).entries(), stored.as_slice());
}

#[test]
fn six_submissions_keep_five() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(RECENT_SEARCHES_FILE);

    let mut recent = RecentSearches::open(&path);
    for term in ["a", "b", "c", "d", "e", "f"] {
        recent.record(term).unwrap();
    }

    let reopened = RecentSearches::open(&path);
    assert_eq!(reopened.entries().len(), DEFAULT_MAX_RECENT);
    assert_eq!(reopened.entries(), ["f", "e", "d", "c", "b"]);
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(RECENT_SEARCHES_FILE);
    fs::write(&path, "not json at all").unwrap();

    let mut recent = RecentSearches::open(&path);
    assert!(recent.entries().is_empty());

    // The next submission replaces the corrupt file
    recent.record("taro").unwrap();
    assert_eq!(RecentSearches::open(&path).entries(), ["taro"]);
}

#[test]
fn oversized_file_is_truncated_on_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(RECENT_SEARCHES_FILE);
    fs::write(&path, r#"["1","2","3","4","5","6","7"]"#).unwrap();

    let recent = RecentSearches::open(&path);
    assert_eq!(recent.entries(), ["1", "2", "3", "4", "5"]);
}

#[test]
fn custom_limit() {
    let dir = tempdir().unwrap();
    let mut recent = RecentSearches::open_with_limit(dir.path().join("h.json"), 2);
    for term in ["a", "b", "c"] {
        recent.record(term).unwrap();
    }
    assert_eq!(recent.entries(), ["c", "b"]);
}

#[test]
fn clear_empties_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(RECENT_SEARCHES_FILE);

    let mut recent = RecentSearches::open(&path);
    recent.record("taro").unwrap();
    recent.clear().unwrap();

    assert!(RecentSearches::open(&path).entries().is_empty());
}

#[test]
fn failed_write_keeps_in_memory_list() {
    let dir = tempdir().unwrap();
    // A directory where the file should be makes the rename fail
    let path = dir.path().join(RECENT_SEARCHES_FILE);
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupied"), "x").unwrap();

    let mut recent = RecentSearches::open(&path);
    let err = recent.record("taro").unwrap_err();
    assert!(!err.user_message().is_empty());
    assert_eq!(recent.entries(), ["taro"]);
}
