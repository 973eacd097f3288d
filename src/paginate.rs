//! Page slicing for search results

use serde::Serialize;

/// Results shown per page unless configured otherwise
pub const DEFAULT_PER_PAGE: usize = 5;

/// One page of a result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-indexed page actually served
    pub page: usize,
    pub total_pages: usize,
}

/// Slice `results` into 1-indexed pages of `per_page` items.
///
/// Page 0 is clamped to page 1 and a `per_page` of 0 is treated as 1. Pages
/// past the end yield an empty slice while still reporting `total_pages`.
pub fn paginate<T>(results: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_pages = results.len().div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(results.len());
    let end = start.saturating_add(per_page).min(results.len());

    Page {
        items: &results[start..end],
        page,
        total_pages,
    }
}
