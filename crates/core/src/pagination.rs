//! Page arithmetic for the admin contact listing.
//!
//! Pages are 1-based, fixed-size windows over the contacts ordered by
//! recency. Everything here is plain integer math so the repository and the
//! page renderer agree on the same numbers.

use serde::Serialize;

/// Number of contacts shown per admin page.
pub const PAGE_SIZE: i64 = 20;

/// Normalize a requested page number: missing or `< 1` becomes page 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset of the first item on `page`.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(limit)
}

/// `ceil(total / limit)`; zero when there is nothing to show.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Pagination metadata for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl PageInfo {
    pub fn new(page: i64, per_page: i64, total_count: i64) -> Self {
        Self {
            page,
            per_page,
            total_count,
            total_pages: total_pages(total_count, per_page),
        }
    }

    pub fn offset(&self) -> i64 {
        page_offset(self.page, self.per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
