// ── Persisted selection ──
//
// A tiny key-value file: last selected country id and last generated
// count. Reads are lenient per key; any storage failure is logged and
// the caller carries on with defaults.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use phonegen_core::SavedSelection;

use crate::{ConfigError, STATE_FILE_ENV, dirs_fallback, project_dirs};

/// Resolve the state file path: `PHONEGEN_STATE_FILE`, else the platform
/// data directory.
pub fn state_path() -> PathBuf {
    if let Some(path) = std::env::var_os(STATE_FILE_ENV) {
        return PathBuf::from(path);
    }
    project_dirs().map_or_else(
        || dirs_fallback(".local/share").join("state.toml"),
        |dirs| dirs.data_dir().join("state.toml"),
    )
}

/// Reads and writes [`SavedSelection`] at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(state_path())
    }
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved selection. A missing file is an empty selection.
    ///
    /// Keys are read independently: a mistyped `count` does not discard
    /// a valid `country`. A count stored as a string is parsed.
    pub fn try_load(&self) -> Result<SavedSelection, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved state");
                return Ok(SavedSelection::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let table: toml::Table = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let country = table
            .get("country")
            .and_then(toml::Value::as_str)
            .map(str::to_owned);
        let count = match table.get("count") {
            Some(toml::Value::Integer(n)) => Some(*n),
            Some(toml::Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };

        Ok(SavedSelection { country, count })
    }

    /// Like [`try_load`](Self::try_load), but never fails: errors are
    /// logged and an empty selection is returned.
    pub fn load(&self) -> SavedSelection {
        self.try_load().unwrap_or_else(|err| {
            warn!(error = %err, "could not read saved state, using defaults");
            SavedSelection::default()
        })
    }

    pub fn try_save(&self, saved: &SavedSelection) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = toml::to_string(saved).map_err(|source| ConfigError::Serialization {
            what: "state",
            source,
        })?;
        std::fs::write(&self.path, text).map_err(io_err)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }

    /// Persist `saved`, logging instead of failing. Returns whether the
    /// write succeeded.
    pub fn save(&self, saved: &SavedSelection) -> bool {
        match self.try_save(saved) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "could not persist state");
                false
            }
        }
    }

    /// Remove the state file. Succeeds if it is already gone.
    pub fn clear(&self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ConfigError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("data").join("state.toml"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_empty_selection() {
        let (_dir, store) = store();
        assert_eq!(store.try_load().unwrap(), SavedSelection::default());
    }

    #[test]
    fn save_and_load() {
        let (_dir, store) = store();
        let saved = SavedSelection {
            country: Some("kr".into()),
            count: Some(120),
        };
        assert!(store.save(&saved));
        assert_eq!(store.load(), saved);
    }

    #[test]
    fn keys_are_read_independently() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "country = \"de\"\ncount = [1, 2]\n").unwrap();
        let saved = store.load();
        assert_eq!(saved.country.as_deref(), Some("de"));
        assert_eq!(saved.count, None);
    }

    #[test]
    fn string_count_is_parsed() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "count = \" 35 \"\n").unwrap();
        assert_eq!(store.load().count, Some(35));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "this is = = not toml").unwrap();
        assert!(matches!(store.try_load(), Err(ConfigError::Parse { .. })));
        assert_eq!(store.load(), SavedSelection::default());
    }

    #[test]
    fn unwritable_location_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let store = StateStore::new(blocker.join("state.toml"));
        assert!(!store.save(&SavedSelection::default()));
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let (_dir, store) = store();
        store.save(&SavedSelection::default());
        assert!(store.path().exists());
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }
}
