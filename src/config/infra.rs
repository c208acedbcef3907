//! Infra-repo block and its entries
//!
//! An entry is written either as a bare name or as a record:
//!
//! ```json
//! "repos": ["terraform-modules", {"name": "sdk", "system": "payments"}]
//! ```
//!
//! [`normalize`] is the only conversion between the two forms. After
//! loading, every entry in a document is in record form.

use serde::{Deserialize, Serialize};

/// Detailed infra-repo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraRepo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Upstream clone URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
}

impl InfraRepo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: None,
            description: None,
            upstream: None,
        }
    }
}

/// An entry in `infra_repos.repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfraRepoEntry {
    Name(String),
    Record(InfraRepo),
}

impl InfraRepoEntry {
    /// Entry name without building a record
    pub fn name(&self) -> &str {
        name(self)
    }

    /// System tag, if present and non-empty
    pub fn system_tag(&self) -> Option<&str> {
        match self {
            InfraRepoEntry::Name(_) => None,
            InfraRepoEntry::Record(repo) => super::non_empty(repo.system.as_deref()),
        }
    }

    /// Record view; `None` for a bare name that has not been normalized
    pub fn as_record(&self) -> Option<&InfraRepo> {
        match self {
            InfraRepoEntry::Name(_) => None,
            InfraRepoEntry::Record(repo) => Some(repo),
        }
    }
}

/// Canonical (record) form of an entry
///
/// A bare name `s` becomes `{name: s}`; a record is returned unchanged, so
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(entry: &InfraRepoEntry) -> InfraRepoEntry {
    match entry {
        InfraRepoEntry::Name(name) => InfraRepoEntry::Record(InfraRepo::named(name.as_str())),
        InfraRepoEntry::Record(_) => entry.clone(),
    }
}

/// Name of an entry in either form
pub fn name(entry: &InfraRepoEntry) -> &str {
    match entry {
        InfraRepoEntry::Name(name) => name,
        InfraRepoEntry::Record(repo) => &repo.name,
    }
}

/// How the managed clones are kept current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStrategy {
    Manual,
    Pull,
    Fetch,
    #[serde(other)]
    Other,
}

fn default_readonly() -> bool {
    true
}

/// The `infra_repos` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraRepos {
    /// Managed clone directory; may start with `~`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default = "default_readonly")]
    pub readonly: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncStrategy>,

    /// Contribution policy (free-form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribute: Option<String>,

    #[serde(default)]
    pub repos: Vec<InfraRepoEntry>,
}

impl InfraRepos {
    /// Rewrite every entry into record form
    pub fn normalize_entries(&mut self) {
        self.repos = self.repos.iter().map(normalize).collect();
    }
}
