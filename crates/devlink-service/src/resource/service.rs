//! Resource CRUD, listings, and click tracking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use devlink_auth::access::{AccessPolicy, Operation};
use devlink_core::error::AppError;
use devlink_core::result::AppResult;
use devlink_core::types::{Page, PageRequest, ResourceId};
use devlink_database::store::ResourceStore;
use devlink_entity::{AccessScope, CreateResource, Resource, ResourceFilter, ResourcePatch};

use crate::context::RequestContext;

/// Reported for missing rows and for rows the caller may not touch alike.
const NOT_FOUND: &str = "Resource not found";

/// Fields supplied when creating a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewResource {
    /// Link title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Description.
    pub description: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Raw tags text.
    pub tags: Option<String>,
    /// Visibility flag, private by default.
    pub is_public: Option<bool>,
}

/// Resource operations scoped by the caller's identity.
#[derive(Debug, Clone)]
pub struct ResourceService {
    store: Arc<dyn ResourceStore>,
    policy: AccessPolicy,
}

impl ResourceService {
    /// Creates a new resource service.
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self {
            store,
            policy: AccessPolicy::new(),
        }
    }

    /// Creates a resource owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, input: NewResource) -> AppResult<Resource> {
        if input.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if input.url.trim().is_empty() {
            return Err(AppError::validation("URL is required"));
        }

        let resource = self
            .store
            .create(&CreateResource {
                owner_id: ctx.user_id,
                title: input.title,
                url: input.url,
                description: input.description.unwrap_or_default(),
                category: input.category.unwrap_or_default(),
                tags: input.tags.unwrap_or_default(),
                is_public: input.is_public.unwrap_or(false),
            })
            .await?;

        info!(user_id = %ctx.user_id, resource_id = %resource.id, "Resource created");
        Ok(resource)
    }

    /// Fetches one resource the caller owns or that is public.
    pub async fn get(&self, ctx: &RequestContext, id: ResourceId) -> AppResult<Resource> {
        let scope = self.policy.scope_for(Some(ctx.user_id), Operation::Read)?;
        self.store
            .find_by_id_scoped(id, scope)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Lists the caller's resources, newest first.
    pub async fn list_owned(
        &self,
        ctx: &RequestContext,
        filter: ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>> {
        let filter = filter.normalized();
        match self.policy.scope_for(Some(ctx.user_id), Operation::ListOwned)? {
            AccessScope::Owner(owner) => self.store.find_by_owner(owner, &filter, page).await,
            other => Err(AppError::internal(format!(
                "Unexpected scope for owned listing: {other:?}"
            ))),
        }
    }

    /// Lists public resources of every owner, newest first.
    pub async fn list_public(
        &self,
        filter: ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>> {
        let filter = filter.normalized();
        match self.policy.scope_for(None, Operation::ListPublic)? {
            AccessScope::Public => self.store.find_public(&filter, page).await,
            other => Err(AppError::internal(format!(
                "Unexpected scope for public listing: {other:?}"
            ))),
        }
    }

    /// Applies a partial update to a resource the caller owns.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ResourceId,
        patch: ResourcePatch,
    ) -> AppResult<Resource> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if patch.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(AppError::validation("URL cannot be empty"));
        }

        let scope = self.policy.scope_for(Some(ctx.user_id), Operation::Update)?;
        let updated = if patch.is_empty() {
            self.store.find_by_id_scoped(id, scope).await?
        } else {
            self.store.update_scoped(id, scope, &patch).await?
        };

        let resource = updated.ok_or_else(|| AppError::not_found(NOT_FOUND))?;
        debug!(user_id = %ctx.user_id, resource_id = %id, "Resource updated");
        Ok(resource)
    }

    /// Soft-deletes a resource the caller owns.
    pub async fn delete(&self, ctx: &RequestContext, id: ResourceId) -> AppResult<()> {
        let scope = self.policy.scope_for(Some(ctx.user_id), Operation::Delete)?;
        if !self.store.soft_delete_scoped(id, scope).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        info!(user_id = %ctx.user_id, resource_id = %id, "Resource deleted");
        Ok(())
    }

    /// Records one click. Needs no identity and never reports whether the
    /// resource exists.
    pub async fn record_click(&self, id: ResourceId) -> AppResult<()> {
        let scope = self.policy.scope_for(None, Operation::Click)?;
        self.store.increment_clicks(id, scope).await.map_err(|e| {
            error!(resource_id = %id, error = %e, "Failed to track click");
            AppError::internal("Failed to track click")
        })
    }
}
