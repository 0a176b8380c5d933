//! Listing query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use devlink_core::error::AppError;
use devlink_core::types::PageRequest;
use devlink_core::types::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use devlink_entity::ResourceFilter;

/// Query parameters accepted by resource listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceQuery {
    /// Page number (1-based, default: 1).
    pub page: Option<i64>,
    /// Items per page (default: 20, max: 100).
    pub limit: Option<i64>,
    /// Category substring.
    pub category: Option<String>,
    /// Tags substring.
    pub tags: Option<String>,
    /// Title/description/URL substring.
    pub search: Option<String>,
    /// Visibility filter, owned listings only.
    pub is_public: Option<bool>,
}

impl ResourceQuery {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn page_request(&self) -> PageRequest {
        let page = self.page.unwrap_or(1).max(1) as u64;
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(1, MAX_PAGE_SIZE as i64) as u64;
        PageRequest::new(page, limit)
    }

    /// Extracts the listing filters.
    pub fn filter(&self) -> ResourceFilter {
        ResourceFilter {
            category: self.category.clone(),
            tags: self.tags.clone(),
            search: self.search.clone(),
            is_public: self.is_public,
        }
    }
}

impl<S> FromRequestParts<S> for ResourceQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ResourceQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(query)
    }
}
