//! Typed path parameter extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use devlink_core::error::AppError;
use devlink_core::types::ResourceId;

/// A `{id}` path segment holding a positive resource id.
#[derive(Debug, Clone, Copy)]
pub struct ResourcePath(pub ResourceId);

impl<S> FromRequestParts<S> for ResourcePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid resource ID"))?;
        parse_resource_id(&raw).map(Self)
    }
}

/// Parses a resource id from a path segment.
pub fn parse_resource_id(s: &str) -> Result<ResourceId, AppError> {
    match s.parse::<ResourceId>() {
        Ok(id) if id.get() > 0 => Ok(id),
        _ => Err(AppError::validation("Invalid resource ID")),
    }
}
