//! Text rendering for query and audit results

use std::path::Path;

use console::Style;

use crate::aggregate::{AccountMatch, ResolvedBundle, System};
use crate::audit::{AuditEntry, AuditReport, AuditStatus};
use crate::config::{ConfigDocument, InfraRepoEntry, Project};
use crate::validate::{FieldError, Severity};

macro_rules! display_opt_field {
    ($indent:expr, $label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("{}{} {}", $indent, Style::new().bold().apply_to($label), v);
        }
    };
}

fn heading(text: &str) {
    println!("{}", Style::new().bold().green().apply_to(text));
}

fn name(text: &str) -> String {
    Style::new().bold().yellow().apply_to(text).to_string()
}

fn dim(text: &str) -> String {
    Style::new().dim().apply_to(text).to_string()
}

/// Machine identity and collection counts
pub fn display_summary(doc: &ConfigDocument, systems: usize) {
    let machine = &doc.machine;
    println!("{} ({})", name(&machine.name), machine.id);
    display_opt_field!("  ", "Type:", machine.machine_type.map(|t| format!("{t:?}").to_lowercase()));
    display_opt_field!("  ", "OS:", machine.os);
    display_opt_field!("  ", "Arch:", machine.arch);
    display_opt_field!("  ", "Agent root:", machine.agent_root);
    display_opt_field!("  ", "Description:", machine.description);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Schema:"),
        doc.schema_version
    );
    println!();
    println!("  projects: {}", doc.projects.len());
    println!("  systems:  {systems}");
    println!("  bundles:  {}", doc.bundles.len());
    println!("  infra:    {}", doc.infra_entries().len());
    println!(
        "  accounts: {}",
        doc.accounts.values().map(Vec::len).sum::<usize>()
    );
}

/// One line per project
pub fn display_project_list(projects: &[&Project]) {
    if projects.is_empty() {
        println!("No projects.");
        return;
    }
    for project in projects {
        let mut line = format!("  {}", name(&project.name));
        if let Some(path) = &project.path {
            line.push_str(&format!("  {path}"));
        }
        let tags: Vec<&str> = project
            .project_type
            .as_deref()
            .into_iter()
            .chain(project.system_tag())
            .collect();
        if !tags.is_empty() {
            line.push_str(&format!("  {}", dim(&format!("[{}]", tags.join(", ")))));
        }
        println!("{line}");
    }
}

/// Full detail for one project
pub fn display_project(
    project: &Project,
    resolved: Option<&Path>,
    exists: bool,
    branch: Option<&str>,
) {
    println!("{}", name(&project.name));
    display_opt_field!("  ", "Description:", project.description);
    if let Some(path) = resolved {
        let state = if exists { "" } else { " (missing)" };
        println!(
            "  {} {}{}",
            Style::new().bold().apply_to("Path:"),
            path.display(),
            Style::new().red().apply_to(state)
        );
    }
    display_opt_field!("  ", "Type:", project.project_type);
    display_opt_field!("  ", "System:", project.system_tag());
    display_opt_field!("  ", "Branch:", branch);
    if let Some(git) = &project.git {
        display_opt_field!("  ", "Remote:", git.remote);
        display_opt_field!("  ", "Declared branch:", git.branch);
    }
    if !project.tags.is_empty() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Tags:"),
            project.tags.join(", ")
        );
    }
}

fn display_infra_entry(entry: &InfraRepoEntry, clone_path: Option<&Path>) {
    println!("  {}", name(entry.name()));
    if let Some(record) = entry.as_record() {
        display_opt_field!("    ", "Description:", record.description);
        display_opt_field!("    ", "System:", record.system);
        display_opt_field!("    ", "Upstream:", record.upstream);
    }
    if let Some(path) = clone_path {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Clone:"),
            path.display()
        );
    }
}

/// One system with its members
pub fn display_system(system: &System<'_>) {
    heading(system.name);
    if !system.projects.is_empty() {
        println!(" projects:");
        display_project_list(&system.projects);
    }
    if !system.infra_repos.is_empty() {
        println!(" infra repos:");
        for entry in &system.infra_repos {
            display_infra_entry(entry, None);
        }
    }
}

/// Infra block with each entry's clone path
pub fn display_infra(doc: &ConfigDocument, clone_root: Option<&Path>) {
    let Some(infra) = &doc.infra_repos else {
        println!("No infra repos.");
        return;
    };
    heading("Infra repos");
    display_opt_field!("  ", "Path:", infra.path);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Readonly:"),
        infra.readonly
    );
    display_opt_field!("  ", "Sync:", infra.sync.map(|s| format!("{s:?}").to_lowercase()));
    display_opt_field!("  ", "Contribute:", infra.contribute);
    println!();
    for entry in &infra.repos {
        let clone = clone_root.map(|root| root.join(entry.name()));
        display_infra_entry(entry, clone.as_deref());
    }
}

/// Bundle with members, missing ones flagged
pub fn display_bundle(resolved: &ResolvedBundle<'_>) {
    let bundle = resolved.bundle;
    heading(bundle.name.as_deref().unwrap_or(&bundle.id));
    if bundle.name.is_some() {
        println!("  {} {}", Style::new().bold().apply_to("Id:"), bundle.id);
    }
    display_opt_field!("  ", "Description:", bundle.description);
    display_opt_field!("  ", "Primary:", resolved.primary);
    for member in &resolved.members {
        match member.project {
            Some(project) => println!(
                "  {}  {}",
                name(member.name),
                dim(project.path.as_deref().unwrap_or("-"))
            ),
            None => println!(
                "  {}  {}",
                name(member.name),
                Style::new().red().apply_to("missing")
            ),
        }
    }
}

pub fn display_account(found: &AccountMatch<'_>) {
    let mut line = format!("  {}", name(&found.identity()));
    if let Some(email) = &found.account.email {
        line.push_str(&format!("  {email}"));
    }
    if found.account.default {
        line.push_str(&format!("  {}", dim("(default)")));
    }
    println!("{line}");
    display_opt_field!("    ", "Description:", found.account.description);
}

fn display_entries(title: &str, entries: &[AuditEntry], style: &Style) {
    if entries.is_empty() {
        return;
    }
    println!("{} ({}):", style.apply_to(title), entries.len());
    for entry in entries {
        let git = if entry.has_git { " [git]" } else { "" };
        println!(
            "  {}  {}{}  {}",
            name(&entry.name),
            entry.path.display(),
            git,
            dim(&entry.source.to_string())
        );
        if let Some(remote) = &entry.remote {
            println!("    {} {remote}", Style::new().bold().apply_to("origin:"));
        }
    }
    println!();
}

/// Audit report grouped by discrepancy kind
pub fn display_audit(report: &AuditReport) {
    if report.managed_dirs.is_empty() {
        println!("{}", dim("No managed directories on disk."));
    } else {
        println!("Managed directories:");
        for dir in &report.managed_dirs {
            println!("  {}  {}", dir.path.display(), dim(&dir.source.to_string()));
        }
    }
    println!();

    display_entries("Orphans", &report.orphans, &Style::new().bold().red());
    display_entries("Stale", &report.stale, &Style::new().bold().red());
    display_entries("Strays", &report.strays, &Style::new().bold().yellow());

    if !report.unreadable.is_empty() {
        println!("{}", dim("Could not read:"));
        for path in &report.unreadable {
            println!("  {}", dim(&path.display().to_string()));
        }
        println!();
    }

    match report.status() {
        AuditStatus::Clean => println!("{}", Style::new().green().apply_to("All clear.")),
        AuditStatus::StraysOnly => println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("No drift; unregistered repositories found.")
        ),
        AuditStatus::Drift => {}
    }
}

pub fn display_field_errors(errors: &[FieldError]) {
    if errors.is_empty() {
        println!("{}", Style::new().green().apply_to("Valid."));
        return;
    }
    for error in errors {
        let style = match error.severity {
            Severity::Error => Style::new().bold().red(),
            Severity::Warning => Style::new().bold().yellow(),
        };
        println!(
            "{}: {}: {}",
            style.apply_to(error.severity),
            error.field,
            error.message
        );
    }
}
