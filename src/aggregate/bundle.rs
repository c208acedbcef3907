//! Bundle resolution: bundle id to the projects it references

use serde::Serialize;

use super::Lookup;
use crate::config::{Bundle, ConfigDocument, Project};
use crate::error::{ReferenceKind, UnresolvedReference};

/// One listed reference and the project it names, if that project exists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleMember<'a> {
    pub name: &'a str,
    pub missing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<&'a Project>,
}

impl BundleMember<'_> {
    pub fn is_resolved(&self) -> bool {
        self.project.is_some()
    }
}

/// A bundle with its references looked up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedBundle<'a> {
    pub bundle: &'a Bundle,
    /// Declared primary, else the first listed reference
    pub primary: Option<&'a str>,
    /// One entry per listed reference, in listed order
    pub members: Vec<BundleMember<'a>>,
}

impl ResolvedBundle<'_> {
    /// Names listed by the bundle that match no project
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter(|m| m.missing).map(|m| m.name)
    }
}

/// Look up bundle `id` and resolve each listed project name
///
/// Unknown project names stay in the result, flagged missing.
pub fn resolve_bundle<'a>(doc: &'a ConfigDocument, id: &str) -> Lookup<ResolvedBundle<'a>> {
    let bundle = doc
        .bundles
        .iter()
        .find(|b| b.id == id)
        .ok_or_else(|| UnresolvedReference::new(ReferenceKind::Bundle, id, doc.bundle_ids()))?;

    let members = bundle
        .projects
        .iter()
        .map(|name| {
            let project = doc.projects.iter().find(|p| &p.name == name);
            BundleMember {
                name,
                missing: project.is_none(),
                project,
            }
        })
        .collect();

    Ok(ResolvedBundle {
        bundle,
        primary: bundle.primary(),
        members,
    })
}
