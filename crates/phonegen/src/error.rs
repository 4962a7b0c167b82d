//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use phonegen_config::ConfigError;
use phonegen_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: u8 = 1;
    pub const USAGE: u8 = 2;
    pub const NOT_FOUND: u8 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(phonegen::not_found),
        help("Run: phonegen {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(phonegen::validation))]
    Validation { field: String, reason: String },

    #[error("Nothing to export: the batch is empty")]
    #[diagnostic(code(phonegen::empty_batch), help("Generate with --count 1 or more."))]
    EmptyBatch,

    // ── Files ────────────────────────────────────────────────────────
    #[error("Could not write export file {}", path.display())]
    #[diagnostic(
        code(phonegen::export),
        help("Check that the directory is writable, or pass another one: --export <DIR>")
    )]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(
        code(phonegen::config),
        help("Inspect the files with: phonegen config path")
    )]
    Config(#[from] ConfigError),

    #[error("Could not render {format} output: {message}")]
    #[diagnostic(code(phonegen::render), help("Try another format: --output table"))]
    Render { format: &'static str, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::EmptyBatch => exit_code::USAGE,
            Self::Export { .. } | Self::Config(_) | Self::Render { .. } | Self::Io(_) => {
                exit_code::GENERAL
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CountryNotFound { identifier } => CliError::NotFound {
                resource_type: "country".into(),
                identifier,
                list_command: "countries".into(),
            },

            CoreError::InvalidCount { .. } => CliError::Validation {
                field: "count".into(),
                reason: err.to_string(),
            },

            CoreError::EmptyBatch => CliError::EmptyBatch,

            CoreError::Export { path, source } => CliError::Export { path, source },

            CoreError::Import { source, .. } => CliError::Io(source),
        }
    }
}
