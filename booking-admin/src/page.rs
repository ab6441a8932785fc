//! Pagination Engine

/// One page of `items`, with 1-based `page_number`.
///
/// Out-of-range requests yield an empty slice; staying in range is the
/// caller's responsibility (navigation is disabled at the boundaries).
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages, never 0
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}
