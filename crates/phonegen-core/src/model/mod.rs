// ── Domain model ──
//
// Country records and generation batches. Everything here is plain data;
// behavior lives in `catalog`, `generator`, and `selection`.

mod batch;
mod country;

pub use batch::{Batch, BatchSize};
pub use country::{CountryRecord, PLACEHOLDER};
