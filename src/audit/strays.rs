//! Bounded scan of the home directory for unregistered repositories
//!
//! Depth 1 children of home are checked for a repository marker. A child
//! with a marker is a candidate and is not descended into; a child without
//! one is descended exactly one more level. Managed directories and noise
//! are skipped entirely.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::listing::is_noise;
use crate::git::has_repo_marker;
use crate::path_utils::comparison_key;

/// Deepest level below home that is inspected
const MAX_SCAN_DEPTH: usize = 2;

/// Output of one scan
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Repository directories not present in the registered set
    pub candidates: Vec<PathBuf>,
    /// Directories the scan could not read
    pub unreadable: Vec<PathBuf>,
}

/// Scan `home` for repositories whose comparison key is not in `registered`
///
/// `skip` holds comparison keys of directories to leave out (managed dirs).
pub fn scan_home(home: &Path, registered: &HashSet<PathBuf>, skip: &HashSet<PathBuf>) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    let mut walker = WalkDir::new(home)
        .min_depth(1)
        .max_depth(MAX_SCAN_DEPTH)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.file_type().is_dir()
                && !is_noise(&entry.file_name().to_string_lossy())
                && !skip.contains(&comparison_key(entry.path()))
        });

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map_or_else(|| home.to_path_buf(), Path::to_path_buf);
                tracing::warn!(path = %path.display(), %err, "skipping unreadable directory");
                outcome.unreadable.push(path);
                continue;
            }
        };

        if !has_repo_marker(entry.path()) {
            continue;
        }

        if !registered.contains(&comparison_key(entry.path())) {
            outcome.candidates.push(entry.path().to_path_buf());
        }
        if entry.depth() < MAX_SCAN_DEPTH {
            walker.skip_current_dir();
        }
    }

    outcome
}
