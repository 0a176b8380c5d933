//! Application builder: wires router, middleware, and state into a service.

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete application.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/resources/`
/// and `/api/v1/resources` reach the same handler. Path normalization has
/// to wrap the router from the outside to take effect before matching.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
