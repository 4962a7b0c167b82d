//! Command handlers, one module per top-level subcommand.

pub mod config_cmd;
pub mod countries;
pub mod generate;
pub mod select;
pub mod status;

use phonegen_core::{Catalog, Selection};

use crate::cli::Command;
use crate::config::Ctx;
use crate::error::CliError;

pub fn dispatch(cmd: Command, ctx: &Ctx) -> Result<(), CliError> {
    let catalog = Catalog::builtin();
    match cmd {
        Command::Countries(args) => countries::handle(&catalog, &args, ctx),
        Command::Select(args) => select::handle(&catalog, &args, ctx),
        Command::Generate(args) => generate::handle(&catalog, &args, ctx),
        Command::Status => status::handle(&catalog, ctx),
        Command::Config(args) => config_cmd::handle(&args, ctx),
        Command::Completions(_) => unreachable!("handled before dispatch"),
    }
}

/// Rebuild the saved selection, falling back to catalog and config defaults.
pub(crate) fn restore_selection(catalog: &Catalog, ctx: &Ctx) -> Selection {
    Selection::restore(catalog, &ctx.store.load(), ctx.config.defaults.count)
}

/// Convert a 1-based `--page` value into a 0-based cursor.
pub(crate) fn page_index(page: u32) -> usize {
    usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX)
}
