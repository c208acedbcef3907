//! Systems: projects and infra repos grouped by their `system` tag

use serde::Serialize;

use super::Lookup;
use crate::config::infra::normalize;
use crate::config::{ConfigDocument, InfraRepoEntry, Project};
use crate::error::{ReferenceKind, UnresolvedReference};

/// Everything sharing one `system` tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System<'a> {
    pub name: &'a str,
    pub projects: Vec<&'a Project>,
    /// Entries in record form
    pub infra_repos: Vec<InfraRepoEntry>,
}

impl<'a> System<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            projects: Vec::new(),
            infra_repos: Vec::new(),
        }
    }
}

/// Systems in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Systems<'a> {
    buckets: Vec<System<'a>>,
}

impl<'a> Systems<'a> {
    pub fn get(&self, name: &str) -> Option<&System<'a>> {
        self.buckets.iter().find(|s| s.name == name)
    }

    /// Like [`Systems::get`], reporting the known names on a miss
    pub fn find(&self, name: &str) -> Lookup<&System<'a>> {
        self.get(name).ok_or_else(|| {
            UnresolvedReference::new(ReferenceKind::System, name, self.names())
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.buckets.iter().map(|s| s.name.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &System<'a>> {
        self.buckets.iter()
    }

    fn bucket(&mut self, name: &'a str) -> &mut System<'a> {
        let index = match self.buckets.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.buckets.push(System::new(name));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index]
    }
}

/// Group tagged projects and infra repos by system
///
/// Untagged entries (absent or blank `system`) are left out entirely, so
/// the result is empty exactly when nothing in the document is tagged.
/// Projects are scanned before infra repos.
pub fn collect_systems(doc: &ConfigDocument) -> Systems<'_> {
    let mut systems = Systems::default();

    for project in &doc.projects {
        if let Some(tag) = project.system_tag() {
            systems.bucket(tag).projects.push(project);
        }
    }

    for entry in doc.infra_entries() {
        if let Some(tag) = entry.system_tag() {
            systems.bucket(tag).infra_repos.push(normalize(entry));
        }
    }

    systems
}
