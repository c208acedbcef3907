//! `hop accounts` and `hop account <key>`

use super::Context;
use crate::aggregate::{find_account, list_accounts};
use crate::cli::NameArgs;
use crate::error::Result;
use crate::ui::{self, display};

pub fn run_list(ctx: &Context) -> Result<()> {
    let doc = ctx.load()?;
    let accounts = list_accounts(&doc);

    ui::emit(ctx.format, &accounts, || {
        if accounts.is_empty() {
            println!("No accounts.");
            return;
        }
        for found in &accounts {
            display::display_account(found);
        }
    })
}

pub fn run_show(ctx: &Context, args: &NameArgs) -> Result<()> {
    let doc = ctx.load()?;
    let found = find_account(&doc, &args.name)?;
    ui::emit(ctx.format, &found, || display::display_account(&found))
}
