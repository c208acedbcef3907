//! Bundle: a named, ordered set of project references

use serde::{Deserialize, Serialize};

/// A bundle points at projects by name; it does not own them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub projects: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_project: Option<String>,
}

impl Bundle {
    pub fn new(id: impl Into<String>, projects: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            projects,
            primary_project: None,
        }
    }

    /// Declared primary project, else the first listed reference.
    ///
    /// Computed on every call and never written back to the bundle.
    pub fn primary(&self) -> Option<&str> {
        self.primary_project
            .as_deref()
            .or_else(|| self.projects.first().map(String::as_str))
    }
}
