//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Build a request from optional query values, applying defaults.
    pub fn from_query(page: Option<u64>, limit: Option<u64>) -> Self {
        Self::new(page.unwrap_or(1), limit.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    /// Calculate the SQL `OFFSET` value, capped at `i64::MAX` so it always
    /// binds as a non-negative `BIGINT`.
    pub fn offset(&self) -> i64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        // `new` clamps to 1..=100; the field may still be set directly.
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of matching items before pagination.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl<T> Page<T> {
    /// Create a page from items and the filtered total.
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Total number of pages: `ceil(total / limit)`, zero for an empty set.
    pub fn pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    /// Transform the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_calculation() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(2, 5).offset(), 5);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_huge_page_offset_stays_non_negative() {
        let req = PageRequest::new(100_000_000_000_000_000, 100);
        assert_eq!(req.offset(), i64::MAX);

        let req = PageRequest::new(u64::MAX, MAX_PAGE_SIZE);
        assert_eq!(req.offset(), i64::MAX);
    }

    #[test]
    fn test_clamping() {
        let req = PageRequest::new(0, 1000);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(1, 0).limit, 1);
    }

    #[test]
    fn test_defaults_from_query() {
        let req = PageRequest::from_query(None, None);
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.limit, 20);
    }

    #[test]
    fn test_page_count() {
        let page = Page::new(vec![0; 5], 12, PageRequest::new(2, 5));
        assert_eq!(page.pages(), 3);

        let empty: Page<u8> = Page::new(Vec::new(), 0, PageRequest::default());
        assert_eq!(empty.pages(), 0);

        let exact: Page<u8> = Page::new(Vec::new(), 40, PageRequest::new(1, 20));
        assert_eq!(exact.pages(), 2);
    }
}
