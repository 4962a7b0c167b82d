//! Shared configuration for the phonegen CLI and TUI.
//!
//! Two files live here: `config.toml` (user preferences, loaded through
//! figment with `PHONEGEN_` env overrides) and `state.toml` (the
//! persisted selection, see [`StateStore`]). Both binaries depend on
//! this crate; the CLI layers its global flags on top.

mod state;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use phonegen_core::BatchSize;

pub use state::{StateStore, state_path};

/// Overrides the config file location.
pub const CONFIG_FILE_ENV: &str = "PHONEGEN_CONFIG";

/// Overrides the state file location.
pub const STATE_FILE_ENV: &str = "PHONEGEN_STATE_FILE";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to serialize {what}: {source}")]
    Serialization {
        what: &'static str,
        #[source]
        source: toml::ser::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    /// CLI output format: table, json, json-compact, yaml, plain.
    #[serde(default = "default_output")]
    pub output: String,

    /// Color mode: auto, always, never.
    #[serde(default = "default_color")]
    pub color: String,

    /// Count used when nothing has been persisted yet.
    #[serde(default)]
    pub count: BatchSize,

    /// Export directory when none is given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            count: BatchSize::DEFAULT,
            export_dir: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

impl Config {
    /// Directory exports go to when the caller names none.
    pub fn export_dir(&self) -> PathBuf {
        self.defaults
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ── Paths ───────────────────────────────────────────────────────────

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "phonegen", "phonegen")
}

pub(crate) fn dirs_fallback(kind: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(kind);
    p.push("phonegen");
    p
}

/// Resolve the config file path: `PHONEGEN_CONFIG`, else XDG / platform
/// conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_FILE_ENV) {
        return PathBuf::from(path);
    }
    project_dirs().map_or_else(
        || dirs_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, layered as defaults → file → env.
///
/// Env keys use `__` as the section separator so that field names keep
/// their underscores: `PHONEGEN_DEFAULTS__EXPORT_DIR=/tmp/out`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::prefixed("PHONEGEN_")
                .ignore(&["config", "state_file"])
                .split("__"),
        );

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if it is missing or broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring unreadable config, using defaults");
        Config::default()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|jail| {
            let cfg = load_config_from(&jail.directory().join("absent.toml")).unwrap();
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.defaults.count, BatchSize::DEFAULT);
            assert_eq!(cfg.export_dir(), PathBuf::from("."));
            Ok(())
        });
    }

    #[test]
    fn file_values_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [defaults]
                output = "json"
                count = 250
                export_dir = "/tmp/numbers"
                "#,
            )?;
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.defaults.output, "json");
            assert_eq!(cfg.defaults.color, "auto");
            assert_eq!(cfg.defaults.count.get(), 250);
            assert_eq!(cfg.export_dir(), PathBuf::from("/tmp/numbers"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[defaults]\ncount = 250\n")?;
            jail.set_env("PHONEGEN_DEFAULTS__COUNT", "42");
            jail.set_env("PHONEGEN_DEFAULTS__EXPORT_DIR", "out");
            jail.set_env("PHONEGEN_STATE_FILE", "/tmp/elsewhere.toml");
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.defaults.count.get(), 42);
            assert_eq!(cfg.export_dir(), PathBuf::from("out"));
            Ok(())
        });
    }

    #[test]
    fn out_of_range_count_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[defaults]\ncount = 0\n")?;
            let result = load_config_from(&jail.directory().join("config.toml"));
            assert!(matches!(result, Err(ConfigError::Figment(_))));
            Ok(())
        });
    }

    #[test]
    fn loading_a_missing_file_never_creates_it() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("config.toml");
            let cfg = load_config_from(&path).unwrap();
            assert_eq!(cfg, Config::default());
            assert!(!path.exists());
            Ok(())
        });
    }
}
