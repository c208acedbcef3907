//! Document validation seam
//!
//! The loader only enforces required fields. Anything beyond that goes
//! through a [`DocumentValidator`]; an external JSON-Schema validator plugs
//! in here. [`ReferenceLint`] is the built-in one: it checks the
//! cross-references the queries rely on.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::config::ConfigDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A problem tied to one field of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `bundles[0].projects[1]`
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl FieldError {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Checks a loaded document, returning every problem found
pub trait DocumentValidator {
    fn validate(&self, doc: &ConfigDocument) -> Vec<FieldError>;
}

/// Number of error-severity entries
pub fn error_count(errors: &[FieldError]) -> usize {
    errors
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .count()
}

/// Cross-reference checks: duplicate keys and dangling bundle references
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLint;

impl DocumentValidator for ReferenceLint {
    fn validate(&self, doc: &ConfigDocument) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let mut project_names = HashSet::new();
        for (i, project) in doc.projects.iter().enumerate() {
            if !project_names.insert(project.name.as_str()) {
                errors.push(FieldError::error(
                    format!("projects[{i}].name"),
                    format!("duplicate project name '{}'", project.name),
                ));
            }
        }

        let mut bundle_ids = HashSet::new();
        for (i, bundle) in doc.bundles.iter().enumerate() {
            if !bundle_ids.insert(bundle.id.as_str()) {
                errors.push(FieldError::error(
                    format!("bundles[{i}].id"),
                    format!("duplicate bundle id '{}'", bundle.id),
                ));
            }
            for (j, member) in bundle.projects.iter().enumerate() {
                if !project_names.contains(member.as_str()) {
                    errors.push(FieldError::error(
                        format!("bundles[{i}].projects[{j}]"),
                        format!("bundle '{}' references unknown project '{member}'", bundle.id),
                    ));
                }
            }
            if let Some(primary) = bundle.primary_project.as_deref() {
                if !bundle.projects.iter().any(|p| p == primary) {
                    errors.push(FieldError::error(
                        format!("bundles[{i}].primary_project"),
                        format!("primary project '{primary}' is not listed in bundle '{}'", bundle.id),
                    ));
                }
            }
        }

        if let Some(infra) = &doc.infra_repos {
            let mut repo_names = HashSet::new();
            for (i, entry) in infra.repos.iter().enumerate() {
                if !repo_names.insert(entry.name()) {
                    errors.push(FieldError::warning(
                        format!("infra_repos.repos[{i}]"),
                        format!("duplicate infra repo '{}'", entry.name()),
                    ));
                }
            }
            if infra.path.is_none() && !infra.repos.is_empty() {
                errors.push(FieldError::warning(
                    "infra_repos.path",
                    "repos are listed but no clone directory is set",
                ));
            }
        }

        errors
    }
}
