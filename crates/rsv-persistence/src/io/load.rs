//! Loading operations.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{PersistenceError, Result};

/// Load a JSON value from `path`.
///
/// A missing file is `Ok(None)`; unreadable or malformed files are errors.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let loaded: Option<Vec<String>> = load_json(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_wrong_shape_is_deserialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = load_json::<Vec<String>>(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialization { .. }));
    }
}
