mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Ctx;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = ExitCode::from(err.exit_code());
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let directives = format!("phonegen={level},phonegen_core={level},phonegen_config={level}");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Needs neither config nor state
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "phonegen", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let ctx = Ctx::resolve(&cli.global);
            tracing::debug!(
                command = ?cmd,
                output = ?ctx.output,
                state = %ctx.store.path().display(),
                "dispatching"
            );
            commands::dispatch(cmd, &ctx)
        }
    }
}
