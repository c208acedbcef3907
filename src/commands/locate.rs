//! `hop where`: print the descriptor path

use super::Context;
use crate::error::Result;
use crate::ui;

pub fn run(ctx: &Context) -> Result<()> {
    let located = ctx.locate()?;
    ui::emit(ctx.format, &located, || {
        if ctx.verbose {
            println!("{}  ({})", located.path.display(), located.source);
        } else {
            println!("{}", located.path.display());
        }
    })
}
