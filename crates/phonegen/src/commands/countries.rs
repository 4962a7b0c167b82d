//! Country list / search command handler.

use tabled::Tabled;

use phonegen_core::paginate::{self, COUNTRY_PAGE_SIZE};
use phonegen_core::{Catalog, CountryRecord};

use crate::cli::{CountriesArgs, OutputFormat};
use crate::config::Ctx;
use crate::error::CliError;
use crate::output;

use super::page_index;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Country")]
    name: &'static str,
    #[tabled(rename = "Dial code")]
    dial_code: &'static str,
    #[tabled(rename = "Format")]
    pattern: &'static str,
}

impl From<&&'static CountryRecord> for CountryRow {
    fn from(c: &&'static CountryRecord) -> Self {
        Self {
            id: c.id,
            name: c.name,
            dial_code: c.dial_code,
            pattern: c.pattern,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(catalog: &Catalog, args: &CountriesArgs, ctx: &Ctx) -> Result<(), CliError> {
    let query = args.query.as_deref().unwrap_or_default();
    let matches = catalog.search(query);

    if matches.is_empty() {
        output::print_status(&format!("No countries match '{query}'"), ctx.quiet);
        return Ok(());
    }

    let page = if args.page.all {
        paginate::paginate(&matches, 0, matches.len().try_into().unwrap_or(COUNTRY_PAGE_SIZE))
    } else {
        paginate::paginate(&matches, page_index(args.page.page), COUNTRY_PAGE_SIZE)
    };

    let mut out = output::render_list(
        ctx.output,
        page.items,
        |c| CountryRow::from(c),
        |c| c.id.to_owned(),
    )?;
    if ctx.output == OutputFormat::Table {
        let footer = format!(
            "Page {} · {} of {} countries",
            page.label(),
            page.items.len(),
            page.total_items
        );
        out.push('\n');
        out.push_str(&output::dim(&footer, ctx.color));
    }
    output::print_output(&out, ctx.quiet)?;
    Ok(())
}
