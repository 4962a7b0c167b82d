//! Country selection command handler.

use phonegen_core::{Catalog, CountryRecord};

use crate::cli::SelectArgs;
use crate::config::Ctx;
use crate::error::CliError;
use crate::output;

use super::restore_selection;

/// Multi-line detail view of a country.
pub(crate) fn format_country(country: &CountryRecord, color: bool) -> String {
    format!(
        "{}\n  ID:        {}\n  Dial code: {}\n  Format:    {} {}",
        output::heading(country.name, color),
        country.id,
        country.dial_code,
        country.dial_code,
        country.pattern,
    )
}

pub fn handle(catalog: &Catalog, args: &SelectArgs, ctx: &Ctx) -> Result<(), CliError> {
    let country = catalog.resolve(&args.country)?;

    let mut selection = restore_selection(catalog, ctx);
    selection.select(country);
    if ctx.store.save(selection.saved()) {
        tracing::info!(country = country.id, "selection saved");
    } else {
        output::print_status("warning: could not save the selection", ctx.quiet);
    }

    let out = output::render_single(
        ctx.output,
        country,
        |c| format_country(c, ctx.color),
        |c| c.id.to_owned(),
    )?;
    output::print_output(&out, ctx.quiet)?;
    Ok(())
}
