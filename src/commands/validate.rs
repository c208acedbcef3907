//! `hop validate` and `hop normalize`

use super::Context;
use crate::cli::OutputFormat;
use crate::error::{HopError, Result};
use crate::ui::{self, display};
use crate::validate::{DocumentValidator, ReferenceLint, error_count};

/// Load (required fields) then lint cross-references
pub fn run(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;
    let errors = ReferenceLint.validate(&doc);

    ui::emit(ctx.format, &errors, || display::display_field_errors(&errors))?;

    match error_count(&errors) {
        0 => Ok(()),
        count => Err(HopError::ValidationFailed { count }),
    }
}

/// Print the loaded document in canonical form
///
/// Infra entries come out in record form. Text output is JSON.
pub fn run_normalize(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;
    match ctx.format {
        OutputFormat::Yaml => ui::emit(OutputFormat::Yaml, &doc, || {}),
        OutputFormat::Text | OutputFormat::Json => ui::emit(OutputFormat::Json, &doc, || {}),
    }
}
