// ── Country catalog & search ──
//
// A thin, `Copy` handle over a non-empty `'static` slice of records.
// Lookups hand out `&'static CountryRecord`, so callers never clone
// catalog rows.

mod data;

use crate::error::CoreError;
use crate::model::CountryRecord;

/// Read-only view over the country table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    records: &'static [CountryRecord],
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            records: data::COUNTRIES,
        }
    }

    /// Wrap an arbitrary static table. Returns `None` for an empty table,
    /// since every consumer relies on a first entry to fall back to.
    #[cfg(test)]
    fn from_static(records: &'static [CountryRecord]) -> Option<Self> {
        (!records.is_empty()).then_some(Self { records })
    }

    /// All records in catalog order.
    pub fn all(&self) -> &'static [CountryRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The default selection: the first catalog entry.
    pub fn first(&self) -> &'static CountryRecord {
        &self.records[0]
    }

    /// Exact identifier lookup, ignoring ASCII case.
    pub fn get(&self, id: &str) -> Option<&'static CountryRecord> {
        let records = self.records;
        records.iter().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
    }

    /// Like [`get`](Self::get), but reports a missing id as an error.
    pub fn resolve(&self, id: &str) -> Result<&'static CountryRecord, CoreError> {
        self.get(id).ok_or_else(|| CoreError::CountryNotFound {
            identifier: id.to_owned(),
        })
    }

    /// Records whose name, dial code, or identifier contains `query`
    /// (case-insensitive), in catalog order. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&'static CountryRecord> {
        let records = self.records;
        if query.is_empty() {
            return records.iter().collect();
        }

        let needle = query.to_lowercase();
        records
            .iter()
            .filter(|c| {
                contains_ci(c.name, &needle)
                    || contains_ci(c.dial_code, &needle)
                    || contains_ci(c.id, &needle)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `haystack` contains an already-lowercased `needle`, ignoring case.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
