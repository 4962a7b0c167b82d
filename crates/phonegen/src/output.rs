//! Rendering of command results for `--output table|json|json-compact|yaml|plain`.
//!
//! Tables go through `tabled`; the structured formats serialize the same
//! value the table was built from, so scripts see every field.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color ────────────────────────────────────────────────────────────

/// `auto` colors only an interactive stdout with `NO_COLOR` unset.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_owned()
    }
}

/// Footers and file paths.
pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_owned()
    }
}

// ── Formats ──────────────────────────────────────────────────────────

/// Serialized form for the machine-readable formats, `None` for the
/// human ones.
fn structured<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Option<Result<String, CliError>> {
    let encoded = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).map_err(|e| render_error("json", e))
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).map_err(|e| render_error("json", e))
        }
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(|e| render_error("yaml", e)),
        OutputFormat::Table | OutputFormat::Plain => return None,
    };
    Some(encoded)
}

pub(crate) fn render_error(format: &'static str, err: impl std::fmt::Display) -> CliError {
    CliError::Render {
        format,
        message: err.to_string(),
    }
}

/// A slice of records: one table row per record, or one `plain_fn`
/// line per record.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    plain_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    if let Some(encoded) = structured(format, data) {
        return encoded;
    }
    Ok(if format == OutputFormat::Table {
        render_table(&data.iter().map(to_row).collect::<Vec<_>>())
    } else {
        data.iter().map(plain_fn).collect::<Vec<_>>().join("\n")
    })
}

/// One record. `detail_fn` draws the human view since detail pages are
/// free-form rather than tabular.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl FnOnce(&T) -> String,
    plain_fn: impl FnOnce(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    if let Some(encoded) = structured(format, data) {
        return encoded;
    }
    Ok(if format == OutputFormat::Table {
        detail_fn(data)
    } else {
        plain_fn(data)
    })
}

pub(crate) fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Printing ─────────────────────────────────────────────────────────

/// Results go to stdout. A closed pipe (`phonegen generate | head`) is
/// not an error.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    match writeln!(io::stdout().lock(), "{output}") {
        Err(err) if err.kind() != io::ErrorKind::BrokenPipe => Err(err.into()),
        _ => Ok(()),
    }
}

/// Progress and warnings go to stderr so they never mix with results.
pub fn print_status(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}
