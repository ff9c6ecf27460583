//! Fixed-size paging over catalog listings.

use serde::Serialize;

/// Number of pairs shown per page in a pair picker.
pub const ITEMS_PER_PAGE: usize = 10;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number actually returned.
    pub page: usize,
    /// Total number of pages (0 for an empty listing).
    pub total_pages: usize,
    /// Total number of items across all pages.
    pub total: usize,
}

impl<T> Page<T> {
    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if there is a page before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Returns the requested 1-based page of `items`.
///
/// Page numbers outside `1..=total_pages` are clamped into range. A
/// `per_page` of zero is treated as [`ITEMS_PER_PAGE`].
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = if per_page == 0 { ITEMS_PER_PAGE } else { per_page };
    let total = items.len();
    let total_pages = total.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        page,
        total_pages,
        total,
    }
}
