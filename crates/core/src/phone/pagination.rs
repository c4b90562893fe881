//! Pure pagination arithmetic.
//!
//! Combines the total-count and page-content results of the persistence
//! collaborator into a [`PageEnvelope`].

use super::{PageEnvelope, PageRequest};

/// Number of pages needed to hold `total_records` at `size` records per page.
///
/// # Examples
///
/// ```
/// use phonebook_core::phone::total_pages;
///
/// assert_eq!(total_pages(5, 3), 2);
/// assert_eq!(total_pages(6, 3), 2);
/// assert_eq!(total_pages(0, 3), 0);
/// ```
///
/// # Panics
///
/// Panics if `size` is zero. A [`PageRequest`] never carries a zero size.
pub fn total_pages(total_records: u64, size: u32) -> u64 {
    total_records.div_ceil(u64::from(size))
}

/// Whether `request` is the last page, i.e. `(page + 1) * size >= total_records`.
///
/// Always true when there are no records.
pub fn is_last_page(request: PageRequest, total_records: u64) -> bool {
    (u64::from(request.page) + 1) * u64::from(request.size) >= total_records
}

/// Builds a page envelope from one page of content and the total record count.
///
/// Content longer than the page size is truncated so `content.len() <= size`
/// holds even if a collaborator over-returns.
pub fn assemble_page<T>(request: PageRequest, mut content: Vec<T>, total_records: u64) -> PageEnvelope<T> {
    content.truncate(request.size as usize);

    PageEnvelope {
        content,
        page: request.page,
        size: request.size,
        last: is_last_page(request, total_records),
        total_pages: total_pages(total_records, request.size),
        total_records,
    }
}
