//! Root descriptor document

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Accounts, Bundle, InfraRepoEntry, InfraRepos, Machine, Project};

/// The machine descriptor (`hop.json`)
///
/// Loaded fresh for every operation and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub schema_version: String,

    pub machine: Machine,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<Bundle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_repos: Option<InfraRepos>,

    #[serde(default, skip_serializing_if = "Accounts::is_empty")]
    pub accounts: Accounts,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<serde_json::Value>,

    /// Tool-owned sections, keyed by tool name
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extensions: serde_json::Map<String, serde_json::Value>,

    /// File this document was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl ConfigDocument {
    pub fn new(schema_version: impl Into<String>, machine: Machine) -> Self {
        Self {
            schema_version: schema_version.into(),
            machine,
            projects: Vec::new(),
            bundles: Vec::new(),
            infra_repos: None,
            accounts: Accounts::new(),
            preferences: None,
            extensions: serde_json::Map::new(),
            source: None,
        }
    }

    /// Bring every polymorphic entry into canonical form
    pub fn normalize(&mut self) {
        if let Some(infra) = self.infra_repos.as_mut() {
            infra.normalize_entries();
        }
    }

    /// Entries of `infra_repos.repos`, empty when the block is absent
    pub fn infra_entries(&self) -> &[InfraRepoEntry] {
        self.infra_repos
            .as_ref()
            .map(|infra| infra.repos.as_slice())
            .unwrap_or_default()
    }

    /// Directory containing the file this document was loaded from
    pub fn base_dir(&self) -> Option<&Path> {
        self.source.as_deref().and_then(Path::parent)
    }

    pub fn project_names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    pub fn bundle_ids(&self) -> Vec<String> {
        self.bundles.iter().map(|b| b.id.clone()).collect()
    }

    /// Opaque section owned by a tool
    pub fn extension(&self, tool: &str) -> Option<&serde_json::Value> {
        self.extensions.get(tool)
    }
}
