//! `hop show`: machine identity and summary

use serde::Serialize;

use super::Context;
use crate::aggregate::collect_systems;
use crate::config::Machine;
use crate::error::Result;
use crate::ui::{self, display};

#[derive(Serialize)]
struct Summary<'a> {
    schema_version: &'a str,
    machine: &'a Machine,
    projects: usize,
    systems: Vec<String>,
    bundles: usize,
    infra_repos: usize,
    accounts: usize,
}

pub fn run(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;
    let systems = collect_systems(&doc).names();

    let summary = Summary {
        schema_version: &doc.schema_version,
        machine: &doc.machine,
        projects: doc.projects.len(),
        systems: systems.clone(),
        bundles: doc.bundles.len(),
        infra_repos: doc.infra_entries().len(),
        accounts: doc.accounts.values().map(Vec::len).sum(),
    };

    ui::emit(ctx.format, &summary, || {
        display::display_summary(&doc, systems.len());
    })
}
