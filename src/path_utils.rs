//! Path utilities for hop
//!
//! Declared paths in `hop.json` may start with `~` or be relative to the
//! document. [`PathResolver`] turns them into absolute paths, and
//! [`comparison_key`] produces a canonical form so two spellings of the
//! same directory compare equal (symlinked temp dirs, trailing `.`/`..`).

use std::path::{Component, Path, PathBuf};

use normpath::PathExt;

/// Expand a leading `~` or `~/` against `home`
///
/// `~user` forms are left untouched.
///
/// ```
/// use hop::path_utils::expand_home;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/ada");
/// assert_eq!(expand_home("~/dev", Some(home)), PathBuf::from("/home/ada/dev"));
/// assert_eq!(expand_home("/srv", Some(home)), PathBuf::from("/srv"));
/// ```
pub fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    match (raw, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (raw, Some(home)) if raw.starts_with("~/") => home.join(&raw[2..]),
        (raw, _) => PathBuf::from(raw),
    }
}

/// Resolves paths declared in a document
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    home: Option<PathBuf>,
    base: Option<PathBuf>,
}

impl PathResolver {
    /// `home` expands `~`; `base` anchors relative paths
    pub fn new(home: Option<PathBuf>, base: Option<PathBuf>) -> Self {
        Self { home, base }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Absolute form of a declared path
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let expanded = expand_home(raw.trim(), self.home.as_deref());
        if expanded.is_absolute() {
            return lexical_clean(&expanded);
        }
        match &self.base {
            Some(base) => lexical_clean(&base.join(expanded)),
            None => lexical_clean(&expanded),
        }
    }
}

/// Drop `.` components and fold `..` without touching the filesystem
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Canonical form of a path, used only for equality checks
///
/// Existing paths are canonicalized. For a path that does not exist, the
/// longest existing ancestor is canonicalized and the missing components
/// are appended, so symlinked prefixes (e.g. `/var` -> `/private/var`)
/// still line up.
pub fn comparison_key(path: &Path) -> PathBuf {
    let path = lexical_clean(path);
    if let Ok(canonical) = dunce::canonicalize(&path) {
        return canonical;
    }

    let mut current = path.as_path();
    let mut missing = Vec::new();
    while !current.exists() {
        match (current.file_name(), current.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return path,
        }
    }

    let mut result = current
        .normalize()
        .map(|norm| dunce::simplified(norm.as_path()).to_path_buf())
        .unwrap_or_else(|_| current.to_path_buf());
    for name in missing.iter().rev() {
        result.push(name);
    }
    result
}
