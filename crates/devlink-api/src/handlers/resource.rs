//! Resource handlers: CRUD, listings, click tracking.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use devlink_core::error::AppError;

use crate::dto::request::{CreateResourceRequest, UpdateResourceRequest};
use crate::dto::response::{MessageResponse, ResourceListResponse, ResourceResponse};
use crate::extractors::{AuthUser, ResourcePath, ResourceQuery, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/resources
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), AppError> {
    let resource = state
        .resource_service
        .create(auth.context(), req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(resource.into())))
}

/// GET /api/v1/resources
pub async fn list_owned(
    State(state): State<AppState>,
    auth: AuthUser,
    query: ResourceQuery,
) -> Result<Json<ResourceListResponse>, AppError> {
    let page = state
        .resource_service
        .list_owned(auth.context(), query.filter(), query.page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/v1/resources/public
pub async fn list_public(
    State(state): State<AppState>,
    query: ResourceQuery,
) -> Result<Json<ResourceListResponse>, AppError> {
    let page = state
        .resource_service
        .list_public(query.filter(), query.page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/v1/resources/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(id): ResourcePath,
) -> Result<Json<ResourceResponse>, AppError> {
    let resource = state.resource_service.get(auth.context(), id).await?;
    Ok(Json(resource.into()))
}

/// PUT /api/v1/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(id): ResourcePath,
    ValidatedJson(req): ValidatedJson<UpdateResourceRequest>,
) -> Result<Json<ResourceResponse>, AppError> {
    let resource = state
        .resource_service
        .update(auth.context(), id, req.into())
        .await?;
    Ok(Json(resource.into()))
}

/// DELETE /api/v1/resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(id): ResourcePath,
) -> Result<Json<MessageResponse>, AppError> {
    state.resource_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::new("Resource deleted successfully")))
}

/// POST /api/v1/resources/{id}/click
pub async fn click(
    State(state): State<AppState>,
    ResourcePath(id): ResourcePath,
) -> Result<Json<MessageResponse>, AppError> {
    state.resource_service.record_click(id).await?;
    Ok(Json(MessageResponse::new("Click tracked")))
}
