//! `phonegen-tui`: terminal UI for generating country-formatted phone numbers.
//!
//! Built on [ratatui](https://ratatui.rs). One screen holds the current
//! country, the count input and the paged result list; `c` opens the
//! country selector overlay with debounced search.
//!
//! Logs are written to a file (default `/tmp/phonegen-tui.log`) to avoid
//! corrupting the terminal UI. The selected country and last count are
//! shared with the `phonegen` CLI through the same state file.

mod action;
mod app;
mod component;
mod debounce;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use phonegen_config::StateStore;
use phonegen_core::clipboard::Osc52;
use phonegen_core::{Catalog, Selection};

use crate::app::App;
use crate::screens::generator::GeneratorScreen;

/// Terminal UI for generating synthetic phone numbers by country.
#[derive(Parser, Debug)]
#[command(name = "phonegen-tui", version, about)]
struct Cli {
    /// State file holding the saved selection
    #[arg(long, env = "PHONEGEN_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Directory for exported number lists (overrides config)
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Log file path (defaults to /tmp/phonegen-tui.log)
    #[arg(long, default_value = "/tmp/phonegen-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Logging to stdout/stderr would corrupt the
/// TUI output. The returned guard must live until exit so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "phonegen_tui={log_level},phonegen_core={log_level},phonegen_config={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("phonegen-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file: hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = phonegen_config::load_config_or_default();
    let store = cli.state_file.clone().map(StateStore::new).unwrap_or_default();
    let export_dir = cli.export_dir.clone().unwrap_or_else(|| config.export_dir());

    let catalog = Catalog::builtin();
    let selection = Selection::restore(&catalog, &store.load(), config.defaults.count);

    info!(
        state = %store.path().display(),
        export_dir = %export_dir.display(),
        country = selection.country().id,
        "starting phonegen-tui"
    );

    let generator = GeneratorScreen::new(selection, store, Box::new(Osc52::stdout()), export_dir);
    let mut app = App::new(generator, catalog);
    app.run().await?;

    Ok(())
}
