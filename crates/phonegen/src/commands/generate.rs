//! Number generation command handler.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tabled::Tabled;

use phonegen_core::clipboard::{self, Osc52};
use phonegen_core::{BatchSize, Catalog, Selection, export};

use crate::cli::{GenerateArgs, OutputFormat};
use crate::config::Ctx;
use crate::error::CliError;
use crate::output;

use super::{page_index, restore_selection};

// ── View ────────────────────────────────────────────────────────────

/// The slice of a batch being printed, with enough context to page on.
#[derive(Debug, Serialize)]
struct NumbersView<'a> {
    country_id: &'static str,
    country_name: &'static str,
    dial_code: &'static str,
    generated_at: DateTime<Utc>,
    total: usize,
    /// 1-based.
    page: usize,
    total_pages: usize,
    numbers: &'a [String],
    #[serde(skip)]
    offset: usize,
}

#[derive(Tabled)]
struct NumberRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Number")]
    number: String,
}

fn numbers_view(selection: &Selection, all: bool) -> Option<NumbersView<'_>> {
    let batch = selection.batch()?;
    let country = selection.country();
    let (numbers, page, total_pages, offset) = if all {
        (batch.numbers.as_slice(), 1, 1, 0)
    } else {
        let page = selection.page();
        (page.items, page.index + 1, page.total_pages, page.offset)
    };
    Some(NumbersView {
        country_id: batch.country_id,
        country_name: batch.country_name,
        dial_code: country.dial_code,
        generated_at: batch.generated_at,
        total: batch.len(),
        page,
        total_pages,
        numbers,
        offset,
    })
}

fn format_view(view: &NumbersView<'_>, color: bool) -> String {
    let title = format!(
        "{} ({}) · {} numbers",
        view.country_name, view.dial_code, view.total
    );
    let rows: Vec<NumberRow> = view
        .numbers
        .iter()
        .enumerate()
        .map(|(i, n)| NumberRow {
            index: view.offset + i + 1,
            number: n.clone(),
        })
        .collect();
    let footer = format!("Page {} / {}", view.page, view.total_pages.max(1));
    format!(
        "{}\n{}\n{}",
        output::heading(&title, color),
        output::render_table(&rows),
        output::dim(&footer, color)
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(catalog: &Catalog, args: &GenerateArgs, ctx: &Ctx) -> Result<(), CliError> {
    let mut selection = restore_selection(catalog, ctx);

    if let Some(id) = &args.country {
        selection.select(catalog.resolve(id)?);
    }
    if let Some(raw) = args.count {
        let count = BatchSize::new(raw)?;
        selection.set_count(i64::from(count.get()));
    }
    if let Some(n) = args.copy_one {
        let count = selection.count().get();
        if n > count {
            return Err(CliError::Validation {
                field: "copy-one".into(),
                reason: format!("{n} is beyond the batch of {count}"),
            });
        }
    }

    match args.seed {
        Some(seed) => selection.generate_with(&mut StdRng::seed_from_u64(seed)),
        None => selection.generate(),
    };

    if !ctx.store.save(selection.saved()) {
        output::print_status("warning: could not save the selection", ctx.quiet);
    }

    export_and_copy(&selection, args, ctx)?;

    if !args.page.all {
        selection.set_page(page_index(args.page.page));
    }
    let Some(view) = numbers_view(&selection, args.page.all) else {
        return Ok(());
    };

    let out = match ctx.output {
        OutputFormat::Plain => view.numbers.join("\n"),
        format => output::render_single(
            format,
            &view,
            |v| format_view(v, ctx.color),
            |_| String::new(),
        )?,
    };
    output::print_output(&out, ctx.quiet)?;
    Ok(())
}

/// Side effects on the fresh batch: `--export`, `--copy`, `--copy-one`.
fn export_and_copy(selection: &Selection, args: &GenerateArgs, ctx: &Ctx) -> Result<(), CliError> {
    let Some(batch) = selection.batch() else {
        return Ok(());
    };

    if let Some(dir) = &args.export {
        let dir = dir.clone().unwrap_or_else(|| ctx.config.export_dir());
        let path = export::write_batch(&dir, batch, Utc::now())?;
        output::print_status(
            &format!("✓ Exported {} numbers to {}", batch.len(), path.display()),
            ctx.quiet,
        );
    }

    let (text, what) = if args.copy {
        (batch.to_text(), "batch")
    } else if let Some(n) = args.copy_one {
        let index = usize::try_from(n.saturating_sub(1)).unwrap_or(usize::MAX);
        let Some(number) = selection.number(index) else {
            return Ok(());
        };
        (number.to_owned(), "number")
    } else {
        return Ok(());
    };

    // Stderr keeps the escape sequence out of piped stdout.
    let mut clip = Osc52::stderr();
    if clipboard::copy_logged(&mut clip, &text, what) {
        output::print_status(&format!("✓ Copied {what} to clipboard"), ctx.quiet);
    } else {
        output::print_status(&format!("warning: could not copy {what} to clipboard"), ctx.quiet);
    }
    Ok(())
}
