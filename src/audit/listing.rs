//! Child-directory listing for managed directories

use std::path::{Path, PathBuf};

/// Directory names never treated as candidates
const NOISE_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "vendor",
    "dist",
    "build",
    "__pycache__",
    "venv",
    "Library",
    "Applications",
    "Pictures",
    "Music",
    "Movies",
    "Public",
    "snap",
];

/// True for hidden names and well-known noise directories
pub fn is_noise(name: &str) -> bool {
    name.starts_with('.') || NOISE_DIRS.contains(&name)
}

/// Result of listing a directory's children
///
/// An empty directory and an unreadable one are different results here,
/// even though the audit treats both as "no children".
#[derive(Debug)]
pub enum DirListing {
    /// Child directory names, noise removed, sorted
    Children(Vec<String>),
    Unreadable { path: PathBuf, reason: String },
}

impl DirListing {
    /// Children, or nothing when unreadable
    pub fn children(&self) -> &[String] {
        match self {
            DirListing::Children(names) => names,
            DirListing::Unreadable { .. } => &[],
        }
    }
}

/// List immediate child directories of `dir`, skipping noise
///
/// Symlinks to directories count as directories. Entries that fail to
/// stat are skipped.
pub fn list_child_dirs(dir: &Path) -> DirListing {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            return DirListing::Unreadable {
                path: dir.to_path_buf(),
                reason: err.to_string(),
            };
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !is_noise(name))
        .collect();
    names.sort();
    DirListing::Children(names)
}
