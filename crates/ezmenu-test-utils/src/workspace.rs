//! [`TestWorkspace`] for on-disk test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory with helper methods for test setup and assertion.
///
/// # Example
///
/// ```rust
/// use ezmenu_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write_file("menu/setlist.json", "[]");
/// ws.assert_file_exists("menu/setlist.json");
/// assert_eq!(ws.read_json("menu/setlist.json"), serde_json::json!([]));
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` relative to the root.
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
        full_path
    }

    /// Write `value` as JSON to `path`.
    pub fn write_json(&self, path: &str, value: &Value) -> PathBuf {
        self.write_file(path, &value.to_string())
    }

    /// Read `path` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read and parse `path` as JSON.
    ///
    /// # Panics
    /// Panics if the file cannot be read or is not JSON.
    pub fn read_json(&self, path: &str) -> Value {
        let content = self.read_file(path);
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("File {path} is not valid JSON: {e}\n{content}"))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
