//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::TempDir;

/// The untyped document used by the conformance suite.
pub type Doc = Value;

/// A small typed document with two optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Data {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<i64>,
}

/// A JSON file path inside its own temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct TempJsonFile {
    dir: TempDir,
    path: PathBuf,
}

impl TempJsonFile {
    /// A path that does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("db.json");
        Self { dir, path }
    }

    /// A file pre-populated with the compact JSON encoding of `obj`.
    pub fn with_content<T: Serialize>(obj: &T) -> Self {
        let file = Self::new();
        file.overwrite(obj);
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Replace the file's content, bypassing any adapter.
    pub fn overwrite<T: Serialize>(&self, obj: &T) {
        let content = serde_json::to_string(obj).expect("serialize fixture");
        std::fs::write(&self.path, content).expect("write fixture");
    }

    /// Parse the file's current content, or `None` if it does not exist.
    pub fn read_json(&self) -> Option<Value> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => panic!("read fixture: {}", e),
        };
        Some(serde_json::from_str(&content).expect("parse fixture"))
    }
}

impl Default for TempJsonFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_temp_json_file_content() {
        let file = TempJsonFile::with_content(&json!({ "a": 1 }));
        assert_eq!(file.read_json(), Some(json!({ "a": 1 })));

        file.overwrite(&Data { a: None, b: Some(2) });
        assert_eq!(file.read_json(), Some(json!({ "b": 2 })));
    }

    #[test]
    fn test_temp_json_file_starts_absent() {
        let file = TempJsonFile::new();
        assert!(file.dir().exists());
        assert_eq!(file.read_json(), None);
    }
}
