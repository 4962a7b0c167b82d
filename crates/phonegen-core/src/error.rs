// ── Core error types ──
//
// User-facing errors from phonegen-core. Storage and clipboard failures
// never surface here: callers log those and carry on.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("Country not found: {identifier}")]
    CountryNotFound { identifier: String },

    // ── Validation errors ────────────────────────────────────────────
    #[error("Invalid count {value}: must be between {min} and {max}")]
    InvalidCount { value: i64, min: u32, max: u32 },

    #[error("Nothing to export: the batch is empty")]
    EmptyBatch,

    // ── Export errors ────────────────────────────────────────────────
    #[error("Failed to write export file {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read batch file {}: {source}", path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
