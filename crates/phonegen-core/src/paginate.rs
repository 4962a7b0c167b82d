// ── Pagination ──
//
// Pure slicing into fixed-size windows. Stateless: callers keep their
// own page cursor and pass it in; out-of-range cursors are clamped.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Page size of the country selector.
pub const COUNTRY_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(50).expect("non-zero");

/// Page size of the generated-number list.
pub const NUMBER_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(20).expect("non-zero");

/// One window over a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// Zero-based page index after clamping.
    pub index: usize,
    /// Total number of pages (`0` for an empty sequence).
    pub total_pages: usize,
    /// Length of the full sequence.
    pub total_items: usize,
    /// Offset of `items[0]` in the full sequence.
    pub offset: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }

    /// Human-facing "current / total" label, 1-based.
    pub fn label(&self) -> String {
        format!("{} / {}", self.index + 1, self.total_pages.max(1))
    }
}

/// Number of pages needed for `len` items: `ceil(len / size)`.
pub fn page_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}

/// Clamp a page cursor into `[0, page_count - 1]` (or `0` when empty).
pub fn clamp_page(page: usize, len: usize, size: NonZeroUsize) -> usize {
    page.min(page_count(len, size).saturating_sub(1))
}

/// Slice `items` into the window at `page`.
pub fn paginate<T>(items: &[T], page: usize, size: NonZeroUsize) -> Page<'_, T> {
    let total_items = items.len();
    let index = clamp_page(page, total_items, size);
    let offset = index * size.get();
    let end = (offset + size.get()).min(total_items);

    Page {
        items: items.get(offset..end).unwrap_or_default(),
        index,
        total_pages: page_count(total_items, size),
        total_items,
        offset,
    }
}
