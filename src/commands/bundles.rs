//! `hop bundles` and `hop bundle <id>`

use console::Style;

use super::Context;
use crate::aggregate::resolve_bundle;
use crate::cli::NameArgs;
use crate::error::Result;
use crate::ui::{self, display};

pub fn run_list(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;

    ui::emit(ctx.format, &doc.bundles, || {
        if doc.bundles.is_empty() {
            println!("No bundles.");
            return;
        }
        for bundle in &doc.bundles {
            println!(
                "  {}  {}",
                Style::new().bold().yellow().apply_to(&bundle.id),
                bundle.projects.join(", ")
            );
        }
    })
}

pub fn run_show(ctx: &Context, args: &NameArgs) -> Result<()> {
    let doc = ctx.load()?;
    let resolved = resolve_bundle(&doc, &args.name)?;

    let missing: Vec<&str> = resolved.missing().collect();
    if !missing.is_empty() {
        tracing::warn!(bundle = %args.name, missing = ?missing, "bundle references unknown projects");
    }

    ui::emit(ctx.format, &resolved, || display::display_bundle(&resolved))
}
