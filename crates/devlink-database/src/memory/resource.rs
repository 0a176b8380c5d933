//! In-memory resource store.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use devlink_core::result::AppResult;
use devlink_core::types::{Page, PageRequest, ResourceId, UserId};
use devlink_entity::{
    AccessScope, CreateResource, RecordStatus, Resource, ResourceFilter, ResourcePatch,
};

use super::Sequence;
use crate::store::ResourceStore;

/// Resource store holding rows in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    resources: Arc<DashMap<ResourceId, Resource>>,
    ids: Arc<Sequence>,
}

impl MemoryResourceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, scope: AccessScope, filter: &ResourceFilter, page: PageRequest) -> Page<Resource> {
        let mut matching: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| r.status.is_active())
            .filter(|r| scope.permits(r.owner_id, r.is_public))
            .filter(|r| filter.matches(r, &scope))
            .map(|r| r.clone())
            .collect();

        matching.sort_by_key(|r| Reverse((r.created_at, r.id)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();

        Page::new(items, total, page)
    }
}

#[async_trait]
impl ResourceStore for MemoryResourceStore {
    async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        let now = Utc::now();
        let resource = Resource {
            id: ResourceId::new(self.ids.next()),
            title: data.title.clone(),
            url: data.url.clone(),
            description: data.description.clone(),
            category: data.category.clone(),
            tags: data.tags.clone(),
            is_public: data.is_public,
            click_count: 0,
            owner_id: data.owner_id,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.resources.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn find_by_id_scoped(
        &self,
        id: ResourceId,
        scope: AccessScope,
    ) -> AppResult<Option<Resource>> {
        Ok(self
            .resources
            .get(&id)
            .filter(|r| r.status.is_active() && scope.permits(r.owner_id, r.is_public))
            .map(|r| r.clone()))
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>> {
        Ok(self.list(AccessScope::Owner(owner), filter, page))
    }

    async fn find_public(
        &self,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>> {
        Ok(self.list(AccessScope::Public, filter, page))
    }

    async fn update_scoped(
        &self,
        id: ResourceId,
        scope: AccessScope,
        patch: &ResourcePatch,
    ) -> AppResult<Option<Resource>> {
        let Some(mut resource) = self.resources.get_mut(&id) else {
            return Ok(None);
        };
        if !resource.status.is_active() || !scope.permits(resource.owner_id, resource.is_public) {
            return Ok(None);
        }
        patch.apply_to(&mut resource);
        resource.updated_at = Utc::now();
        Ok(Some(resource.clone()))
    }

    async fn soft_delete_scoped(&self, id: ResourceId, scope: AccessScope) -> AppResult<bool> {
        let Some(mut resource) = self.resources.get_mut(&id) else {
            return Ok(false);
        };
        if !resource.status.is_active() || !scope.permits(resource.owner_id, resource.is_public) {
            return Ok(false);
        }
        let now = Utc::now();
        resource.status = RecordStatus::Deleted;
        resource.deleted_at = Some(now);
        resource.updated_at = now;
        Ok(true)
    }

    async fn increment_clicks(&self, id: ResourceId, scope: AccessScope) -> AppResult<()> {
        if let Some(mut resource) = self.resources.get_mut(&id) {
            if resource.status.is_active() && scope.permits(resource.owner_id, resource.is_public) {
                resource.click_count += 1;
            }
        }
        Ok(())
    }
}
