// ── Batch export ──
//
// Plain-text export: numbers joined by `\n`, no trailing newline, in a
// file named `{country}_{timestamp}.txt`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::CoreError;
use crate::model::Batch;

/// File stem used when the batch carries no usable country name.
pub const FALLBACK_STEM: &str = "phone";

/// Characters replaced with `_` when building a file name.
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// `YYYY-MM-DDTHH-MM-SS` (UTC), i.e. ISO-8601 with `:` swapped for `-`
/// and sub-second precision dropped.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Attempts at ` (n)` suffixes before giving up on a crowded directory.
const MAX_DUPLICATES: u32 = 999;

fn base_name(country_name: &str, at: DateTime<Utc>) -> String {
    let stem: String = country_name
        .trim()
        .chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { &stem };
    format!("{stem}_{}", timestamp(at))
}

/// Build the export file name for a country name and instant.
pub fn file_name(country_name: &str, at: DateTime<Utc>) -> String {
    format!("{}.txt", base_name(country_name, at))
}

/// Create a file that did not exist before, adding ` (1)`, ` (2)`, ...
/// when an export from the same second is already there.
fn create_unique(dir: &Path, base: &str) -> io::Result<(PathBuf, File)> {
    for n in 0..=MAX_DUPLICATES {
        let name = if n == 0 {
            format!("{base}.txt")
        } else {
            format!("{base} ({n}).txt")
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("{base}.txt and {MAX_DUPLICATES} numbered copies already exist"),
    ))
}

fn export_error(path: PathBuf) -> impl FnOnce(io::Error) -> CoreError {
    move |source| CoreError::Export { path, source }
}

/// Write `batch` into `dir` (created if missing), stamped with `now`.
/// Existing files are never overwritten. Returns the full path written.
pub fn write_batch(dir: &Path, batch: &Batch, now: DateTime<Utc>) -> Result<PathBuf, CoreError> {
    if batch.is_empty() {
        return Err(CoreError::EmptyBatch);
    }

    let base = base_name(batch.country_name, now);
    std::fs::create_dir_all(dir).map_err(export_error(dir.to_path_buf()))?;
    let (path, mut file) =
        create_unique(dir, &base).map_err(export_error(dir.join(format!("{base}.txt"))))?;
    file.write_all(batch.to_text().as_bytes()).map_err(export_error(path.clone()))?;

    info!(path = %path.display(), count = batch.len(), "exported batch");
    Ok(path)
}

/// Read an exported file back into its numbers.
pub fn read_batch(path: &Path) -> Result<Vec<String>, CoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| CoreError::Import {
        path: path.to_path_buf(),
        source,
    })?;

    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(text.split('\n').map(str::to_owned).collect())
}
