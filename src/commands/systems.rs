//! `hop systems` and `hop system <tag>`

use super::Context;
use crate::aggregate::collect_systems;
use crate::cli::NameArgs;
use crate::error::Result;
use crate::ui::{self, display};

pub fn run_list(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;
    let systems = collect_systems(&doc);

    ui::emit(ctx.format, &systems, || {
        if systems.is_empty() {
            println!("No systems. Tag projects or infra repos with \"system\" to group them.");
            return;
        }
        for system in systems.iter() {
            println!(
                "  {}  {} project(s), {} infra repo(s)",
                system.name,
                system.projects.len(),
                system.infra_repos.len()
            );
        }
    })
}

pub fn run_show(ctx: &Context, args: &NameArgs) -> Result<()> {
    let doc = ctx.load()?;
    let systems = collect_systems(&doc);
    let system = systems.find(&args.name)?;

    ui::emit(ctx.format, system, || display::display_system(system))
}
