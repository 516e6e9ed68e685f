//! Pure page arithmetic.
//!
//! Pages are 1-based. Page `0`, a zero page size and pages past the end all
//! select nothing.

use std::ops::Range;

/// Index range of `page` within a collection of `len` items.
///
/// # Examples
///
/// ```
/// use postboard_pagination::page_bounds;
///
/// assert_eq!(page_bounds(15, 1, 5), 0..5);
/// assert_eq!(page_bounds(12, 3, 5), 10..12);
/// assert_eq!(page_bounds(12, 4, 5), 12..12);
/// ```
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }

    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The items shown on `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}

/// Number of pages needed for `len` items, `ceil(len / page_size)`.
///
/// # Examples
///
/// ```
/// use postboard_pagination::page_count;
///
/// assert_eq!(page_count(0, 5), 0);
/// assert_eq!(page_count(15, 5), 3);
/// assert_eq!(page_count(16, 5), 4);
/// ```
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
