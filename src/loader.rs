//! Loading the descriptor
//!
//! The loader checks only the fields every consumer relies on
//! (`schema_version`, `machine.id`, `machine.name`). Full structural
//! validation belongs to a [`crate::validate::DocumentValidator`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::ConfigDocument;
use crate::discovery::{self, DiscoveryPaths};
use crate::error::{self, Result};

/// Fields that must be present and non-empty, as JSON-pointer-ish paths
const REQUIRED_FIELDS: &[&[&str]] = &[
    &["schema_version"],
    &["machine"],
    &["machine", "id"],
    &["machine", "name"],
];

/// Read, check and normalize the descriptor at `path`
pub fn load(path: &Path) -> Result<ConfigDocument> {
    let content = fs::read_to_string(path)
        .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;

    let mut doc = parse(&content, &path.display().to_string())?;
    doc.source = Some(path.to_path_buf());

    tracing::info!(
        path = %path.display(),
        machine = %doc.machine.id,
        projects = doc.projects.len(),
        bundles = doc.bundles.len(),
        "loaded descriptor"
    );
    Ok(doc)
}

/// Same pipeline as [`load`] for an in-memory document
pub fn load_str(content: &str) -> Result<ConfigDocument> {
    parse(content, "<memory>")
}

/// Locate with `paths`, then load; `Ok(None)` when nothing was located
pub fn locate_and_load(
    paths: &DiscoveryPaths,
    start_dir: Option<&Path>,
) -> Result<Option<(PathBuf, ConfigDocument)>> {
    match discovery::locate(paths, start_dir) {
        Some(path) => {
            let doc = load(&path)?;
            Ok(Some((path, doc)))
        }
        None => Ok(None),
    }
}

fn parse(content: &str, origin: &str) -> Result<ConfigDocument> {
    let raw: Value =
        serde_json::from_str(content).map_err(|e| error::config_parse_failed(origin, e.to_string()))?;

    check_required(&raw, origin)?;

    let mut doc: ConfigDocument = serde_json::from_value(raw)
        .map_err(|e| error::config_invalid(format!("{origin}: {e}")))?;
    doc.normalize();
    Ok(doc)
}

fn check_required(raw: &Value, origin: &str) -> Result<()> {
    for field in REQUIRED_FIELDS {
        let present = field
            .iter()
            .try_fold(raw, |node, key| node.get(key))
            .is_some_and(|value| match value {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            });
        if !present {
            return Err(error::missing_field(origin, field.join(".")));
        }
    }
    Ok(())
}
