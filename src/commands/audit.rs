//! `hop audit`: reconcile the descriptor with the filesystem

use super::Context;
use crate::audit::{self, AuditOptions, AuditStatus};
use crate::cli::AuditArgs;
use crate::error::{HopError, Result};
use crate::ui::{self, display};

/// Print the report; drift is returned as an error so the exit status is 1
pub fn run(ctx: &Context, args: &AuditArgs) -> Result<()> {
    let doc = ctx.load()?;
    let report = audit::audit(&doc, &AuditOptions::from_env(args.scan));

    ui::emit(ctx.format, &report, || display::display_audit(&report))?;

    match report.status() {
        AuditStatus::Drift => Err(HopError::AuditDrift {
            orphans: report.orphans.len(),
            stale: report.stale.len(),
        }),
        AuditStatus::Clean | AuditStatus::StraysOnly => Ok(()),
    }
}
