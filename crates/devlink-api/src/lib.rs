//! # devlink-api
//!
//! HTTP API layer for DevLink built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging),
//! extractors (bearer identity, validated JSON, list queries, path ids),
//! and DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
