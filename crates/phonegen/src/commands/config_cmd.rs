//! Config subcommand handlers.

use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::config::{self, Ctx};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct Paths {
    config: String,
    state: String,
}

pub fn handle(args: &ConfigArgs, ctx: &Ctx) -> Result<(), CliError> {
    match args.command {
        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let as_toml = toml::to_string_pretty(&ctx.config)
                .map_err(|e| output::render_error("toml", e))?;
            let out = output::render_single(
                ctx.output,
                &ctx.config,
                |_| as_toml.clone(),
                |_| as_toml.clone(),
            )?;
            output::print_output(out.trim_end(), ctx.quiet)?;
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            let paths = Paths {
                config: config::config_path().display().to_string(),
                state: ctx.store.path().display().to_string(),
            };
            let out = output::render_single(
                ctx.output,
                &paths,
                |p| format!("config: {}\nstate:  {}", p.config, p.state),
                |p| format!("{}\n{}", p.config, p.state),
            )?;
            output::print_output(&out, ctx.quiet)?;
            Ok(())
        }

        // ── Reset state ─────────────────────────────────────────────
        ConfigCommand::ResetState => {
            ctx.store.clear()?;
            output::print_status(
                &format!("✓ Cleared saved selection ({})", ctx.store.path().display()),
                ctx.quiet,
            );
            Ok(())
        }
    }
}
