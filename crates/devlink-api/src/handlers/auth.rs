//! Auth handlers: register, login, profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use devlink_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, ProfileResponse, UserResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let user = state
        .auth_service
        .register(&req.name, &req.email, &req.password)
        .await?;
    let token = state.auth_service.issue_token(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserResponse::from(&user),
            token: token.token,
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        user: UserResponse::from(&result.user),
        token: result.token.token,
    }))
}

/// GET /api/v1/profile
pub async fn profile(auth: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: auth.user_id,
        email: auth.email.clone(),
        message: "This is a protected route".to_string(),
    })
}
