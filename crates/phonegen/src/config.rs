//! CLI configuration: thin wrapper around `phonegen_config` shared types.
//!
//! Resolves the effective output format, color mode, and state store
//! from global flags, falling back to `config.toml` values.

use clap::ValueEnum;
use tracing::warn;

use phonegen_config::StateStore;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::output;

// ── Re-exports from shared crate ────────────────────────────────────

pub use phonegen_config::{Config, config_path, load_config_or_default};

/// Everything a command handler needs, resolved once per invocation.
#[derive(Debug)]
pub struct Ctx {
    pub config: Config,
    pub store: StateStore,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

impl Ctx {
    /// Flag > env > config file > built-in default.
    pub fn resolve(global: &GlobalOpts) -> Self {
        let config = load_config_or_default();

        let output = global
            .output
            .or_else(|| parse_setting("output", &config.defaults.output))
            .unwrap_or(OutputFormat::Table);

        let color_mode = global
            .color
            .or_else(|| parse_setting("color", &config.defaults.color))
            .unwrap_or(ColorMode::Auto);

        let store = global
            .state_file
            .clone()
            .map_or_else(StateStore::default, StateStore::new);

        Self {
            config,
            store,
            output,
            color: output::should_color(color_mode),
            quiet: global.quiet,
        }
    }
}

fn parse_setting<T: ValueEnum>(key: &str, value: &str) -> Option<T> {
    T::from_str(value, true)
        .inspect_err(|_| warn!(key, value, "ignoring unknown config value"))
        .ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn config_strings_parse_case_insensitively() {
        assert_eq!(
            parse_setting::<OutputFormat>("output", "JSON-compact"),
            Some(OutputFormat::JsonCompact)
        );
        assert_eq!(
            parse_setting::<ColorMode>("color", "never"),
            Some(ColorMode::Never)
        );
        assert_eq!(parse_setting::<OutputFormat>("output", "xml"), None);
    }
}
