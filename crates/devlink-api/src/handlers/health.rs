//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "DevLink API is running".to_string(),
    })
}

/// GET /health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let reachable = match state.database.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            false
        }
    };

    let (status, body) = if reachable {
        (StatusCode::OK, DetailedHealthResponse {
            status: "ok".to_string(),
            database: "connected".to_string(),
            provider: state.config.database.provider.clone(),
        })
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, DetailedHealthResponse {
            status: "degraded".to_string(),
            database: "unavailable".to_string(),
            provider: state.config.database.provider.clone(),
        })
    };

    (status, Json(body))
}
