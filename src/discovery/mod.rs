//! Locating the authoritative `hop.json`
//!
//! Sources are tried strictly in this order; the first that names an
//! existing file wins:
//!
//! 1. settings pointer (`hop_config`)
//! 2. `HOP_CONFIG` environment override
//! 3. default path in the user config dir
//! 4. legacy pointer (`hop_config_path`)
//! 5. walk-up search from the start directory
//! 6. fixed system-wide locations
//!
//! Finding nothing is not an error here; callers decide.

pub mod paths;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use paths::{CONFIG_FILE, DiscoveryPaths, ENV_OVERRIDE, WALK_UP_LIMIT};

use crate::path_utils::expand_home;

/// Which source produced the located path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateSource {
    SettingsPointer,
    Environment,
    DefaultPath,
    LegacyPointer,
    WalkUp,
    LegacyLocation,
    /// Given explicitly with `--config`; never produced by [`locate`]
    CommandLine,
}

impl std::fmt::Display for LocateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LocateSource::SettingsPointer => "settings pointer",
            LocateSource::Environment => "HOP_CONFIG",
            LocateSource::DefaultPath => "default path",
            LocateSource::LegacyPointer => "legacy pointer",
            LocateSource::WalkUp => "walk-up search",
            LocateSource::LegacyLocation => "legacy location",
            LocateSource::CommandLine => "--config",
        };
        f.write_str(label)
    }
}

/// A located descriptor and the source that found it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub path: PathBuf,
    pub source: LocateSource,
}

/// Path of the authoritative descriptor, if any
///
/// `start_dir` defaults to the current working directory for the walk-up
/// search.
pub fn locate(paths: &DiscoveryPaths, start_dir: Option<&Path>) -> Option<PathBuf> {
    locate_traced(paths, start_dir).map(|located| located.path)
}

/// Like [`locate`], also reporting which source matched
pub fn locate_traced(paths: &DiscoveryPaths, start_dir: Option<&Path>) -> Option<Located> {
    let home = paths.home.as_deref();

    let found = |path: PathBuf, source: LocateSource| {
        tracing::debug!(path = %path.display(), %source, "located descriptor");
        Located { path, source }
    };

    if let Some(path) = paths
        .settings_file
        .as_deref()
        .and_then(|file| read_pointer(file, paths::SETTINGS_KEY, home))
    {
        return Some(found(path, LocateSource::SettingsPointer));
    }

    if let Some(path) = paths.env_override.as_deref() {
        let path = expand_home(&path.to_string_lossy(), home);
        if path.is_file() {
            return Some(found(path, LocateSource::Environment));
        }
        tracing::debug!(path = %path.display(), "ignoring {} override: no such file", ENV_OVERRIDE);
    }

    if let Some(path) = paths.default_path.as_deref().filter(|p| p.is_file()) {
        return Some(found(path.to_path_buf(), LocateSource::DefaultPath));
    }

    if let Some(path) = paths
        .legacy_pointer
        .as_deref()
        .and_then(|file| read_pointer(file, paths::LEGACY_POINTER_KEY, home))
    {
        return Some(found(path, LocateSource::LegacyPointer));
    }

    let start = match start_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => std::env::current_dir().ok(),
    };
    if let Some(path) = start.as_deref().and_then(find_upwards) {
        return Some(found(path, LocateSource::WalkUp));
    }

    if let Some(path) = paths.legacy_locations.iter().find(|p| p.is_file()) {
        return Some(found(path.clone(), LocateSource::LegacyLocation));
    }

    tracing::debug!("no descriptor found");
    None
}

/// Find `hop.json` in `start` or one of its ancestors
pub fn find_upwards(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(WALK_UP_LIMIT)
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Target of a pointer file, if the file is readable, holds `key`, and the
/// target exists
fn read_pointer(file: &Path, key: &str, home: Option<&Path>) -> Option<PathBuf> {
    let text = match std::fs::read_to_string(file) {
        Ok(text) => text,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(file = %file.display(), %err, "unreadable pointer file");
            }
            return None;
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(file = %file.display(), %err, "malformed pointer file");
            return None;
        }
    };

    let raw = value.get(key)?.as_str()?;
    let mut target = expand_home(raw, home);
    if target.is_relative() {
        target = file.parent()?.join(target);
    }

    if target.is_file() {
        Some(target)
    } else {
        tracing::debug!(file = %file.display(), target = %target.display(), "pointer target missing");
        None
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_dir_at, create_temp_dir, minimal_document, write_json};
    use serde_json::json;

    /// Isolated discovery roots under a temp dir
    fn isolated(root: &Path) -> DiscoveryPaths {
        DiscoveryPaths::rooted(&root.join("config/hop"))
    }

    #[test]
    fn test_settings_pointer_beats_env_override() {
        let temp = create_temp_dir();
        let root = temp.path();
        let pinned = root.join("a/hop.json");
        let env = root.join("b/hop.json");
        write_json(&pinned, &minimal_document());
        write_json(&env, &minimal_document());
        write_json(
            &root.join("config/hop/settings.json"),
            &json!({"hop_config": pinned}),
        );

        let paths = isolated(root).with_env_override(&env);
        let located = locate_traced(&paths, Some(root)).expect("should locate");
        assert_eq!(located.path, pinned);
        assert_eq!(located.source, LocateSource::SettingsPointer);
    }

    #[test]
    fn test_env_override_beats_default() {
        let temp = create_temp_dir();
        let root = temp.path();
        let env = root.join("b/hop.json");
        write_json(&env, &minimal_document());
        write_json(&root.join("config/hop/hop.json"), &minimal_document());

        let paths = isolated(root).with_env_override(&env);
        assert_eq!(locate(&paths, Some(root)), Some(env));
    }

    #[test]
    fn test_missing_env_override_is_skipped() {
        let temp = create_temp_dir();
        let root = temp.path();
        let default = root.join("config/hop/hop.json");
        write_json(&default, &minimal_document());

        let paths = isolated(root).with_env_override(root.join("nope/hop.json"));
        let located = locate_traced(&paths, Some(root)).expect("should locate");
        assert_eq!(located.path, default);
        assert_eq!(located.source, LocateSource::DefaultPath);
    }

    #[test]
    fn test_pointer_to_missing_file_falls_through() {
        let temp = create_temp_dir();
        let root = temp.path();
        let default = root.join("config/hop/hop.json");
        write_json(&default, &minimal_document());
        write_json(
            &root.join("config/hop/settings.json"),
            &json!({"hop_config": root.join("gone.json")}),
        );

        assert_eq!(locate(&isolated(root), Some(root)), Some(default));
    }

    #[test]
    fn test_malformed_settings_pointer_is_skipped() {
        let temp = create_temp_dir();
        let root = temp.path();
        let settings = root.join("config/hop/settings.json");
        create_dir_at(settings.parent().expect("has parent"));
        std::fs::write(&settings, "{ not json").expect("write settings");
        let default = root.join("config/hop/hop.json");
        write_json(&default, &minimal_document());

        assert_eq!(locate(&isolated(root), Some(root)), Some(default));
    }

    #[test]
    fn test_legacy_pointer_uses_its_own_key() {
        let temp = create_temp_dir();
        let root = temp.path();
        let target = root.join("legacy/hop.json");
        write_json(&target, &minimal_document());
        // The new key in the legacy file is not honored
        write_json(
            &root.join("config/hop/pointer.json"),
            &json!({"hop_config": target}),
        );
        let start = create_dir_at(&root.join("elsewhere"));
        assert_eq!(locate(&isolated(root), Some(&start)), None);

        write_json(
            &root.join("config/hop/pointer.json"),
            &json!({"hop_config_path": target}),
        );
        let located = locate_traced(&isolated(root), Some(&start)).expect("should locate");
        assert_eq!(located.path, target);
        assert_eq!(located.source, LocateSource::LegacyPointer);
    }

    #[test]
    fn test_pointer_with_tilde() {
        let temp = create_temp_dir();
        let root = temp.path();
        let home = root.join("home");
        let target = home.join("machines/hop.json");
        write_json(&target, &minimal_document());
        write_json(
            &root.join("config/hop/settings.json"),
            &json!({"hop_config": "~/machines/hop.json"}),
        );

        let paths = isolated(root).with_home(&home);
        assert_eq!(locate(&paths, Some(root)), Some(target));
    }

    #[test]
    fn test_walk_up_finds_nearest() {
        let temp = create_temp_dir();
        let root = temp.path();
        let outer = root.join("proj/hop.json");
        let inner = root.join("proj/sub/hop.json");
        write_json(&outer, &minimal_document());
        let deep = create_dir_at(&root.join("proj/sub/deep/er"));

        assert_eq!(locate(&isolated(root), Some(&deep)), Some(outer.clone()));

        write_json(&inner, &minimal_document());
        let located = locate_traced(&isolated(root), Some(&deep)).expect("should locate");
        assert_eq!(located.path, inner);
        assert_eq!(located.source, LocateSource::WalkUp);
    }

    #[test]
    fn test_legacy_locations_in_order() {
        let temp = create_temp_dir();
        let root = temp.path();
        let first = root.join("etc/one/hop.json");
        let second = root.join("etc/two/hop.json");
        write_json(&second, &minimal_document());
        let start = create_dir_at(&root.join("start"));

        let paths = isolated(root).with_legacy_locations(vec![first.clone(), second.clone()]);
        assert_eq!(locate(&paths, Some(&start)), Some(second));

        write_json(&first, &minimal_document());
        let located = locate_traced(&paths, Some(&start)).expect("should locate");
        assert_eq!(located.path, first);
        assert_eq!(located.source, LocateSource::LegacyLocation);
    }

    #[test]
    fn test_nothing_found() {
        let temp = create_temp_dir();
        let start = create_dir_at(&temp.path().join("empty"));
        assert_eq!(locate(&isolated(temp.path()), Some(&start)), None);
    }
}
