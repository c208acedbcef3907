//! Reconciling the descriptor against the filesystem
//!
//! Three kinds of drift are reported:
//!
//! - **orphans**: children of a managed directory (`machine.agent_root`,
//!   `infra_repos.path`) that no registered path accounts for
//! - **stale**: projects whose declared path no longer exists
//! - **strays**: unregistered repositories found by the optional bounded
//!   home scan
//!
//! The audit is best-effort: unreadable directories are recorded and
//! treated as empty, never fatal.

pub mod listing;
pub mod strays;

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ConfigDocument;
use crate::config::infra::name;
use crate::git;
use crate::path_utils::{PathResolver, comparison_key};
use listing::{DirListing, list_child_dirs};

/// Audit inputs besides the document
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Run the bounded home scan for strays
    pub scan: bool,
    /// Home directory: expands `~` and roots the stray scan
    pub home: Option<PathBuf>,
}

impl AuditOptions {
    /// Options for the current user
    pub fn from_env(scan: bool) -> Self {
        Self {
            scan,
            home: dirs::home_dir(),
        }
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

/// Where a discrepancy was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    AgentRoot,
    InfraRepos,
    Project,
    HomeScan,
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntrySource::AgentRoot => "agent_root",
            EntrySource::InfraRepos => "infra_repos",
            EntrySource::Project => "project",
            EntrySource::HomeScan => "home scan",
        };
        f.write_str(label)
    }
}

/// One discrepancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub name: String,
    pub path: PathBuf,
    pub source: EntrySource,
    pub has_git: bool,
    /// `origin` URL when the directory is a repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

impl AuditEntry {
    /// Entry for an on-disk directory, inspecting its repository state
    fn inspect(path: PathBuf, source: EntrySource) -> Self {
        let has_git = git::has_repo_marker(&path);
        let remote = if has_git { git::origin_url(&path) } else { None };
        Self {
            name: dir_name(&path),
            path,
            source,
            has_git,
            remote,
        }
    }
}

/// A managed directory that was examined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedDir {
    pub path: PathBuf,
    pub source: EntrySource,
}

/// Overall verdict of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Clean,
    /// Only strays were found; reported but not failing
    StraysOnly,
    /// Orphans or stale entries exist
    Drift,
}

impl AuditStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            AuditStatus::Clean | AuditStatus::StraysOnly => 0,
            AuditStatus::Drift => 1,
        }
    }
}

/// Result of one audit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub orphans: Vec<AuditEntry>,
    pub stale: Vec<AuditEntry>,
    pub strays: Vec<AuditEntry>,
    pub managed_dirs: Vec<ManagedDir>,
    /// Directories that could not be listed
    pub unreadable: Vec<PathBuf>,
    /// Whether the home scan ran
    pub scanned: bool,
}

impl AuditReport {
    pub fn status(&self) -> AuditStatus {
        if !self.orphans.is_empty() || !self.stale.is_empty() {
            AuditStatus::Drift
        } else if !self.strays.is_empty() {
            AuditStatus::StraysOnly
        } else {
            AuditStatus::Clean
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status().exit_code()
    }

    pub fn is_clean(&self) -> bool {
        self.status() == AuditStatus::Clean
    }
}

/// Compare declared paths in `doc` with what exists on disk
pub fn audit(doc: &ConfigDocument, options: &AuditOptions) -> AuditReport {
    let resolver = PathResolver::new(
        options.home.clone(),
        doc.base_dir().map(Path::to_path_buf),
    );

    let registered = registered_paths(doc, &resolver);
    let managed_dirs = managed_dirs(doc, &resolver);
    let managed_keys: HashSet<PathBuf> = managed_dirs
        .iter()
        .map(|dir| comparison_key(&dir.path))
        .collect();

    let mut report = AuditReport {
        managed_dirs,
        scanned: options.scan,
        ..AuditReport::default()
    };

    find_orphans(&mut report, &registered);
    find_stale(&mut report, doc, &resolver);

    if options.scan {
        match options.home.as_deref() {
            Some(home) => find_strays(&mut report, home, &registered, &managed_keys),
            None => tracing::warn!("no home directory; skipping stray scan"),
        }
    }

    tracing::info!(
        orphans = report.orphans.len(),
        stale = report.stale.len(),
        strays = report.strays.len(),
        unreadable = report.unreadable.len(),
        "audit complete"
    );
    report
}

/// Comparison keys of every project path and every infra-repo clone path
fn registered_paths(doc: &ConfigDocument, resolver: &PathResolver) -> HashSet<PathBuf> {
    let projects = doc
        .projects
        .iter()
        .filter_map(|p| p.path.as_deref())
        .map(|raw| resolver.resolve(raw));

    let infra_root = infra_root(doc, resolver);
    let infra = doc
        .infra_entries()
        .iter()
        .filter_map(|entry| infra_root.as_ref().map(|root| root.join(name(entry))));

    projects.chain(infra).map(|p| comparison_key(&p)).collect()
}

/// Resolved `infra_repos.path`, when set
pub fn infra_root(doc: &ConfigDocument, resolver: &PathResolver) -> Option<PathBuf> {
    doc.infra_repos
        .as_ref()
        .and_then(|infra| infra.path.as_deref())
        .map(|raw| resolver.resolve(raw))
}

/// Existing managed directories, deduplicated, agent root first
fn managed_dirs(doc: &ConfigDocument, resolver: &PathResolver) -> Vec<ManagedDir> {
    let candidates = [
        doc.machine
            .agent_root
            .as_deref()
            .map(|raw| (resolver.resolve(raw), EntrySource::AgentRoot)),
        infra_root(doc, resolver).map(|path| (path, EntrySource::InfraRepos)),
    ];

    let mut seen = HashSet::new();
    let mut dirs = Vec::new();
    for (path, source) in candidates.into_iter().flatten() {
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), %source, "managed directory missing");
            continue;
        }
        if seen.insert(comparison_key(&path)) {
            dirs.push(ManagedDir { path, source });
        }
    }
    dirs
}

/// Children of managed dirs that are not registered
///
/// A managed dir nested in another one is a child like any other: it is
/// an orphan unless a project or infra repo registers its path.
fn find_orphans(report: &mut AuditReport, registered: &HashSet<PathBuf>) {
    let mut orphans = Vec::new();
    for dir in &report.managed_dirs {
        let listing = list_child_dirs(&dir.path);
        if let DirListing::Unreadable { path, reason } = &listing {
            tracing::warn!(path = %path.display(), %reason, "cannot list managed directory");
            report.unreadable.push(path.clone());
        }

        for child in listing.children() {
            let path = dir.path.join(child);
            let key = comparison_key(&path);
            if !registered.contains(&key) {
                orphans.push(AuditEntry::inspect(path, dir.source));
            }
        }
    }
    report.orphans = orphans;
}

/// Projects whose declared path does not exist; infra repos are not checked
fn find_stale(report: &mut AuditReport, doc: &ConfigDocument, resolver: &PathResolver) {
    report.stale = doc
        .projects
        .iter()
        .filter_map(|project| {
            let path = resolver.resolve(project.path.as_deref()?);
            (!path.exists()).then(|| AuditEntry {
                name: project.name.clone(),
                path,
                source: EntrySource::Project,
                has_git: false,
                remote: None,
            })
        })
        .collect();
}

fn find_strays(
    report: &mut AuditReport,
    home: &Path,
    registered: &HashSet<PathBuf>,
    managed_keys: &HashSet<PathBuf>,
) {
    let outcome = strays::scan_home(home, registered, managed_keys);
    report.unreadable.extend(outcome.unreadable);

    // home may itself be managed; its children are then orphans already
    let orphan_keys: HashSet<PathBuf> = report
        .orphans
        .iter()
        .map(|o| comparison_key(&o.path))
        .collect();

    report.strays = outcome
        .candidates
        .into_iter()
        .filter(|path| !orphan_keys.contains(&comparison_key(path)))
        .map(|path| AuditEntry::inspect(path, EntrySource::HomeScan))
        .collect();
}

fn dir_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}
