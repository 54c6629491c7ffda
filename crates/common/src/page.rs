// ================
// common/src/page.rs
// ================
//! Pagination envelope and page-parameter normalization shared by all
//! list endpoints.

use serde::{Deserialize, Serialize};

/// Default page when the query omits or zeroes `page`.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when the query omits or zeroes `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Hard cap on `page_size`.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Normalized pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub page_size: i64,
}

impl PageParams {
    /// Normalize raw query values: `page < 1` falls back to 1,
    /// `page_size < 1` falls back to 10, and anything above the cap is
    /// clamped to 100.
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 => s.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// Row offset for a SQL `LIMIT ... OFFSET ...` clause.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated list envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_page: i64,
}

impl<T> Paginated<T> {
    /// Assemble an envelope; `total_page` is `ceil(total / page_size)`.
    pub fn new(data: Vec<T>, total: i64, params: PageParams) -> Self {
        let total_page = if total == 0 {
            0
        } else {
            (total + params.page_size - 1) / params.page_size
        };
        Self {
            data,
            total,
            page: params.page,
            page_size: params.page_size,
            total_page,
        }
    }
}
