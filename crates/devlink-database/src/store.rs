//! Store traits implemented by every storage provider.
//!
//! Each method maps to a single storage operation. Every query only sees
//! rows whose status is active.

use async_trait::async_trait;

use devlink_core::result::AppResult;
use devlink_core::types::{Page, PageRequest, ResourceId, UserId};
use devlink_entity::{AccessScope, CreateResource, CreateUser, Resource, ResourceFilter, ResourcePatch, User};

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an active user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find an active user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with `Conflict` if an active user already
    /// has the same email.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Persistence for bookmarked resources.
#[async_trait]
pub trait ResourceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new resource with zero clicks.
    async fn create(&self, data: &CreateResource) -> AppResult<Resource>;

    /// Find an active resource by id, restricted to rows `scope` permits.
    async fn find_by_id_scoped(
        &self,
        id: ResourceId,
        scope: AccessScope,
    ) -> AppResult<Option<Resource>>;

    /// List resources owned by `owner`, newest first.
    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>>;

    /// List public resources of any owner, newest first.
    async fn find_public(
        &self,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>>;

    /// Apply `patch` to an active resource `scope` permits. Returns `None`
    /// when no such row exists.
    async fn update_scoped(
        &self,
        id: ResourceId,
        scope: AccessScope,
        patch: &ResourcePatch,
    ) -> AppResult<Option<Resource>>;

    /// Soft-delete an active resource `scope` permits. Returns `false` when
    /// no such row exists.
    async fn soft_delete_scoped(&self, id: ResourceId, scope: AccessScope) -> AppResult<bool>;

    /// Atomically add one to the click counter of an active resource `scope`
    /// permits. Succeeds whether or not the row exists.
    async fn increment_clicks(&self, id: ResourceId, scope: AccessScope) -> AppResult<()>;
}
