//! Read-only repository inspection
//!
//! Only local state is read: the repository marker, the `origin` URL and
//! the checked-out branch. Nothing here touches the network.

use std::path::Path;

use git2::Repository;

/// Name of the repository marker entry (a directory, or a file for worktrees)
pub const REPO_MARKER: &str = ".git";

/// True if `dir` directly contains a repository marker
pub fn has_repo_marker(dir: &Path) -> bool {
    dir.join(REPO_MARKER).exists()
}

/// URL of the `origin` remote of the repository at `dir`
pub fn origin_url(dir: &Path) -> Option<String> {
    let repo = open(dir)?;
    let remote = repo.find_remote("origin").ok()?;
    remote.url().map(str::to_string)
}

/// Short name of the checked-out branch, `None` when detached or unborn
pub fn head_branch(dir: &Path) -> Option<String> {
    let repo = open(dir)?;
    let head = repo.head().ok()?;
    if !head.is_branch() {
        return None;
    }
    head.shorthand().map(str::to_string)
}

fn open(dir: &Path) -> Option<Repository> {
    match Repository::open(dir) {
        Ok(repo) => Some(repo),
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "not an openable repository");
            None
        }
    }
}
