//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Maximum page size for listings.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size for listings.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Generic pagination parameters (`?page=&page_size=`). One-based pages.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Clamped one-based page number.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Clamped page size.
    pub fn page_size(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}
