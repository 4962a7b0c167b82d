// ── Selection state ──
//
// The view-owned state: selected country, requested count, current
// batch, and result page cursor. Only the country id and the count
// used for the last generation survive a restart (`SavedSelection`).

use std::num::NonZeroUsize;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::generator;
use crate::model::{Batch, BatchSize, CountryRecord};
use crate::paginate::{self, NUMBER_PAGE_SIZE, Page};

/// What gets persisted between sessions. Values are kept raw so a
/// hand-edited or stale file restores gracefully instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSelection {
    /// Identifier of the last selected country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Count used by the last generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Transient selection state owned by a single view.
#[derive(Debug, Clone)]
pub struct Selection {
    country: &'static CountryRecord,
    count: BatchSize,
    batch: Option<Batch>,
    page: usize,
    page_size: NonZeroUsize,
    saved: SavedSelection,
}

impl Selection {
    /// Rebuild state from persisted values. An unknown or missing country
    /// falls back to the catalog's first entry; an invalid or missing
    /// count falls back to `default_count`.
    pub fn restore(catalog: &Catalog, saved: &SavedSelection, default_count: BatchSize) -> Self {
        let country = match saved.country.as_deref() {
            Some(id) => catalog.get(id).unwrap_or_else(|| {
                info!(id, "saved country not in catalog, using default");
                catalog.first()
            }),
            None => catalog.first(),
        };

        let count = match saved.count {
            Some(raw) => BatchSize::new(raw).unwrap_or_else(|_| {
                info!(raw, "saved count out of range, using default");
                default_count
            }),
            None => default_count,
        };

        debug!(country = country.id, %count, "selection restored");

        Self {
            country,
            count,
            batch: None,
            page: 0,
            page_size: NUMBER_PAGE_SIZE,
            saved: saved.clone(),
        }
    }

    pub fn country(&self) -> &'static CountryRecord {
        self.country
    }

    pub fn count(&self) -> BatchSize {
        self.count
    }

    pub fn batch(&self) -> Option<&Batch> {
        self.batch.as_ref()
    }

    /// Values to persist after the latest change.
    pub fn saved(&self) -> &SavedSelection {
        &self.saved
    }

    /// Switch country. Discards the current batch and resets the page.
    pub fn select(&mut self, country: &'static CountryRecord) {
        self.country = country;
        self.batch = None;
        self.page = 0;
        self.saved.country = Some(country.id.to_owned());
    }

    /// Accept a count only if it is in range; otherwise keep the
    /// previous one. Returns whether the count was accepted.
    pub fn set_count(&mut self, raw: i64) -> bool {
        match BatchSize::new(raw) {
            Ok(count) => {
                self.count = count;
                true
            }
            Err(_) => false,
        }
    }

    /// Generate a fresh batch with the thread RNG.
    pub fn generate(&mut self) -> &Batch {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a fresh batch, replacing the current one and resetting
    /// the page cursor. Records the count for persistence.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Batch {
        self.page = 0;
        self.saved.count = Some(i64::from(self.count.get()));
        self.batch
            .insert(generator::generate_with(rng, self.country, self.count))
    }

    /// Current result page (empty page when nothing is generated).
    pub fn page(&self) -> Page<'_, String> {
        let numbers = self.batch.as_ref().map_or(&[][..], |b| b.numbers.as_slice());
        paginate::paginate(numbers, self.page, self.page_size)
    }

    /// Move the result cursor by `delta` pages, clamped to the batch.
    pub fn turn_page(&mut self, delta: isize) {
        let len = self.batch.as_ref().map_or(0, Batch::len);
        let target = self.page.saturating_add_signed(delta);
        self.page = paginate::clamp_page(target, len, self.page_size);
    }

    /// Jump to a page (clamped).
    pub fn set_page(&mut self, page: usize) {
        let len = self.batch.as_ref().map_or(0, Batch::len);
        self.page = paginate::clamp_page(page, len, self.page_size);
    }

    /// Number at an absolute batch index.
    pub fn number(&self, index: usize) -> Option<&str> {
        self.batch
            .as_ref()
            .and_then(|b| b.numbers.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn saved(country: Option<&str>, count: Option<i64>) -> SavedSelection {
        SavedSelection {
            country: country.map(str::to_owned),
            count,
        }
    }

    #[test]
    fn restore_uses_saved_values() {
        let catalog = Catalog::builtin();
        let sel = Selection::restore(&catalog, &saved(Some("jp"), Some(250)), BatchSize::DEFAULT);
        assert_eq!(sel.country().id, "jp");
        assert_eq!(sel.count().get(), 250);
        assert!(sel.batch().is_none());
    }

    #[test]
    fn restore_falls_back_on_missing_values() {
        let catalog = Catalog::builtin();
        let sel = Selection::restore(&catalog, &SavedSelection::default(), BatchSize::DEFAULT);
        assert_eq!(sel.country().id, catalog.first().id);
        assert_eq!(sel.count(), BatchSize::DEFAULT);
    }

    #[test]
    fn restore_falls_back_on_invalid_values() {
        let catalog = Catalog::builtin();
        let default_count = BatchSize::new(15).unwrap();
        for bad_count in [0, -3, 10_001] {
            let sel = Selection::restore(
                &catalog,
                &saved(Some("atlantis"), Some(bad_count)),
                default_count,
            );
            assert_eq!(sel.country().id, catalog.first().id);
            assert_eq!(sel.count(), default_count);
        }
    }

    #[test]
    fn select_clears_batch_and_records_country() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::restore(&catalog, &SavedSelection::default(), BatchSize::DEFAULT);
        sel.generate();
        sel.set_page(0);
        assert!(sel.batch().is_some());

        sel.select(catalog.get("br").unwrap());
        assert!(sel.batch().is_none());
        assert_eq!(sel.page().index, 0);
        assert_eq!(sel.saved().country.as_deref(), Some("br"));
    }

    #[test]
    fn set_count_keeps_previous_on_invalid_input() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::restore(&catalog, &SavedSelection::default(), BatchSize::DEFAULT);
        assert!(sel.set_count(42));
        assert!(!sel.set_count(0));
        assert!(!sel.set_count(10_001));
        assert_eq!(sel.count().get(), 42);
    }

    #[test]
    fn count_is_persisted_only_on_generate() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::restore(&catalog, &SavedSelection::default(), BatchSize::DEFAULT);
        sel.set_count(33);
        assert_eq!(sel.saved().count, None);

        sel.generate();
        assert_eq!(sel.saved().count, Some(33));
    }

    #[test]
    fn generate_resets_page_and_paginates_results() {
        let catalog = Catalog::builtin();
        let mut sel =
            Selection::restore(&catalog, &saved(Some("us"), Some(45)), BatchSize::DEFAULT);
        let mut rng = StdRng::seed_from_u64(3);
        sel.generate_with(&mut rng);

        let page = sel.page();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 20);

        sel.turn_page(5);
        assert_eq!(sel.page().index, 2);
        assert_eq!(sel.page().items.len(), 5);

        sel.turn_page(-1);
        assert_eq!(sel.page().index, 1);

        sel.generate_with(&mut rng);
        assert_eq!(sel.page().index, 0);
    }

    #[test]
    fn number_lookup_by_absolute_index() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::restore(&catalog, &saved(Some("gb"), Some(3)), BatchSize::DEFAULT);
        assert!(sel.number(0).is_none());

        let first = sel.generate().numbers[0].clone();
        assert_eq!(sel.number(0), Some(first.as_str()));
        assert!(sel.number(3).is_none());
    }

    #[test]
    fn empty_selection_has_empty_page() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::restore(&catalog, &SavedSelection::default(), BatchSize::DEFAULT);
        sel.turn_page(1);
        let page = sel.page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn saved_selection_toml_shape() {
        let saved = saved(Some("cn"), Some(10));
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, r#"{"country":"cn","count":10}"#);
        assert_eq!(serde_json::to_string(&SavedSelection::default()).unwrap(), "{}");
    }
}
