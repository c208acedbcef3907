//! Lookup misses
//!
//! A miss is data: it carries the keys that were searched so a caller can
//! print "X not found, available: [...]" without a second pass over the
//! document.

use std::fmt;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// What kind of named reference was looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    System,
    Bundle,
    Project,
    Account,
}

impl ReferenceKind {
    fn slug(self) -> &'static str {
        match self {
            ReferenceKind::System => "system",
            ReferenceKind::Bundle => "bundle",
            ReferenceKind::Project => "project",
            ReferenceKind::Account => "account",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReferenceKind::System => "System",
            ReferenceKind::Bundle => "Bundle",
            ReferenceKind::Project => "Project",
            ReferenceKind::Account => "Account",
        };
        f.write_str(label)
    }
}

/// A named lookup that found no match
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} '{key}' not found")]
pub struct UnresolvedReference {
    pub kind: ReferenceKind,
    pub key: String,
    /// Every key that was searched, in document order
    pub available: Vec<String>,
}

impl UnresolvedReference {
    pub fn new(kind: ReferenceKind, key: impl Into<String>, available: Vec<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            available,
        }
    }
}

impl Diagnostic for UnresolvedReference {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("hop::lookup::{}_not_found", self.kind.slug())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.available.is_empty() {
            Some(Box::new(format!("No {}s are defined", self.kind.slug())))
        } else {
            Some(Box::new(format!(
                "Available: {}",
                self.available.join(", ")
            )))
        }
    }
}
