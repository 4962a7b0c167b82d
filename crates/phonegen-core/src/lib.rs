//! Data layer shared by the `phonegen` CLI and TUI.
//!
//! This crate owns everything that is not presentation:
//!
//! - **[`Catalog`]**: the static, compiled-in table of [`CountryRecord`]s
//!   with case-insensitive substring [`search`](Catalog::search) over
//!   name, dial code, and identifier.
//!
//! - **[`generator`]**: fills a country's pattern with random digits to
//!   produce a [`Batch`] of formatted numbers. Accepts any `rand::Rng`
//!   so runs can be seeded.
//!
//! - **[`paginate`]**: stateless fixed-size windows over a slice.
//!
//! - **[`export`]** / **[`clipboard`]**: side effects on a batch:
//!   newline-joined `.txt` files and OSC 52 clipboard writes.
//!
//! - **[`Selection`]**: the view-owned selection state (country, count,
//!   batch, page cursor) and its restore rules from a [`SavedSelection`].

pub mod catalog;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod generator;
pub mod model;
pub mod paginate;
pub mod selection;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use error::CoreError;
pub use model::{Batch, BatchSize, CountryRecord};
pub use paginate::{Page, paginate};
pub use selection::{SavedSelection, Selection};
