//! Saved selection status handler.

use std::path::PathBuf;

use serde::Serialize;

use phonegen_core::Catalog;

use crate::config::Ctx;
use crate::error::CliError;
use crate::output;

use super::restore_selection;

#[derive(Debug, Serialize)]
struct Status {
    country_id: &'static str,
    country_name: &'static str,
    dial_code: &'static str,
    pattern: &'static str,
    count: u32,
    state_file: PathBuf,
}

fn format_status(s: &Status, color: bool) -> String {
    format!(
        "{}\n  Country:    {} ({})\n  Format:     {} {}\n  Count:      {}\n  State file: {}",
        output::heading("Current selection", color),
        s.country_name,
        s.country_id,
        s.dial_code,
        s.pattern,
        s.count,
        output::dim(&s.state_file.display().to_string(), color),
    )
}

pub fn handle(catalog: &Catalog, ctx: &Ctx) -> Result<(), CliError> {
    let selection = restore_selection(catalog, ctx);
    let country = selection.country();
    let status = Status {
        country_id: country.id,
        country_name: country.name,
        dial_code: country.dial_code,
        pattern: country.pattern,
        count: selection.count().get(),
        state_file: ctx.store.path().to_path_buf(),
    };

    let out = output::render_single(
        ctx.output,
        &status,
        |s| format_status(s, ctx.color),
        |s| format!("{}\t{}", s.country_id, s.count),
    )?;
    output::print_output(&out, ctx.quiet)?;
    Ok(())
}
