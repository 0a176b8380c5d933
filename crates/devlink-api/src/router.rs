//! Route definitions for the DevLink HTTP API.
//!
//! Versioned routes are mounted under `/api/v1`; liveness checks live at
//! `/health` and `/health/detailed`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(resource_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
        .nest("/api/v1", api_routes)
        .fallback(handlers::fallback::not_found)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Registration and login (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Token identity echo (bearer token)
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(handlers::auth::profile))
}

/// Resource CRUD, listings, and click tracking
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/resources",
            get(handlers::resource::list_owned).post(handlers::resource::create),
        )
        .route("/resources/public", get(handlers::resource::list_public))
        .route(
            "/resources/{id}",
            get(handlers::resource::get)
                .put(handlers::resource::update)
                .delete(handlers::resource::delete),
        )
        .route("/resources/{id}/click", post(handlers::resource::click))
}
