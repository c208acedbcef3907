//! Name lookups for projects and accounts

use serde::Serialize;

use super::Lookup;
use crate::config::account::identity;
use crate::config::{Account, ConfigDocument, Project};
use crate::error::{ReferenceKind, UnresolvedReference};

/// First project named `name`
pub fn find_project<'a>(doc: &'a ConfigDocument, name: &str) -> Lookup<&'a Project> {
    doc.projects
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| UnresolvedReference::new(ReferenceKind::Project, name, doc.project_names()))
}

/// Projects matching optional system and type filters, in document order
pub fn filter_projects<'a>(
    doc: &'a ConfigDocument,
    system: Option<&str>,
    project_type: Option<&str>,
) -> Vec<&'a Project> {
    doc.projects
        .iter()
        .filter(|p| system.is_none_or(|s| p.system_tag() == Some(s)))
        .filter(|p| project_type.is_none_or(|t| p.project_type.as_deref() == Some(t)))
        .collect()
}

/// An account together with the service it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountMatch<'a> {
    pub service: &'a str,
    #[serde(flatten)]
    pub account: &'a Account,
}

impl AccountMatch<'_> {
    pub fn identity(&self) -> String {
        identity(self.service, self.account)
    }
}

/// Every account, services in key order
pub fn list_accounts(doc: &ConfigDocument) -> Vec<AccountMatch<'_>> {
    doc.accounts
        .iter()
        .flat_map(|(service, accounts)| {
            accounts.iter().map(move |account| AccountMatch {
                service: service.as_str(),
                account,
            })
        })
        .collect()
}

/// Account by `service:username` or bare `username`
///
/// A bare username matches the first service that has it.
pub fn find_account<'a>(doc: &'a ConfigDocument, key: &str) -> Lookup<AccountMatch<'a>> {
    let all = list_accounts(doc);
    let hit = match key.split_once(':') {
        Some((service, username)) => all
            .iter()
            .find(|m| m.service == service && m.account.username == username),
        None => all.iter().find(|m| m.account.username == key),
    };

    hit.cloned().ok_or_else(|| {
        UnresolvedReference::new(
            ReferenceKind::Account,
            key,
            all.iter().map(AccountMatch::identity).collect(),
        )
    })
}
