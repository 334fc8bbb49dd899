//! Pagination math for the 3x3 card grid.

/// Records shown per grid page (3 columns x 3 rows).
pub const PAGE_SIZE: usize = 9;

/// One page of a paginated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number, after clamping.
    pub number: usize,
    /// Total number of pages; at least 1 even for an empty sequence.
    pub total_pages: usize,
    /// The items on this page, borrowed from the full sequence.
    pub items: &'a [T],
}

/// Number of pages needed for `count` items: `max(1, ceil(count / page_size))`.
///
/// An empty catalog still has exactly one (empty) page, so the footer and
/// the clamp below always have a valid target.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    count.div_ceil(page_size).max(1)
}

/// Clamp a requested 1-based page into `[1, total_pages]`.
///
/// Idempotent: clamping an already-clamped page changes nothing.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slice out one page of `items`.
///
/// The requested page is clamped first, so any integer request lands on a
/// real page. Concatenating the items of pages `1..=total_pages` reproduces
/// `items` exactly.
pub fn paginate<T>(items: &[T], requested_page: usize, page_size: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);
    let number = clamp_page(requested_page, total);
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        number,
        total_pages: total,
        items: &items[start..end],
    }
}
