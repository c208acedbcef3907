//! Test fixtures shared by unit tests
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_git_repo_at, write_json};
//!
//! let temp = create_temp_dir();
//! let repo = create_git_repo_at(&temp.path().join("dev/api"));
//! write_json(&temp.path().join("hop.json"), &minimal_document());
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Absolute base for temp dirs, so they never land under the working directory
/// when `TMPDIR` is relative.
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a directory (and parents) holding an initialized git repository.
///
/// # Panics
///
/// Panics if the directory or repository cannot be created.
pub fn create_git_repo_at(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path).expect("Failed to create repository directory");
    git2::Repository::init(path).expect("Failed to init git repository");
    path.to_path_buf()
}

/// Create a plain directory (and parents).
///
/// # Panics
///
/// Panics if the directory cannot be created.
pub fn create_dir_at(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path).expect("Failed to create directory");
    path.to_path_buf()
}

/// Write a JSON value to `path`, creating parents.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_json(path: &Path, value: &serde_json::Value) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let text = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
    std::fs::write(path, text).expect("Failed to write JSON file");
}

/// Smallest document the loader accepts.
#[must_use]
pub fn minimal_document() -> serde_json::Value {
    serde_json::json!({
        "schema_version": "1.0",
        "machine": {"id": "test-box", "name": "Test Box"}
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_git_repo_at() {
        let temp = create_temp_dir();
        let repo = create_git_repo_at(&temp.path().join("nested/repo"));
        assert!(repo.join(".git").exists());
    }

    #[test]
    fn test_write_json_creates_parents() {
        let temp = create_temp_dir();
        let path = temp.path().join("a/b/hop.json");
        write_json(&path, &minimal_document());
        assert!(path.is_file());
    }
}
