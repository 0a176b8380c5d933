//! Resource repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use devlink_core::error::{AppError, ErrorKind};
use devlink_core::result::AppResult;
use devlink_core::types::{Page, PageRequest, ResourceId, UserId};
use devlink_entity::{AccessScope, CreateResource, Resource, ResourceFilter, ResourcePatch};

use super::contains_pattern;
use crate::store::ResourceStore;

/// Shared filter predicate for owned listings. `$1` is the owner.
const OWNED_WHERE: &str = "status = 'active' AND owner_id = $1 \
     AND ($2::text IS NULL OR category ILIKE $2) \
     AND ($3::text IS NULL OR tags ILIKE $3) \
     AND ($4::text IS NULL OR title ILIKE $4 OR description ILIKE $4 OR url ILIKE $4) \
     AND ($5::boolean IS NULL OR is_public = $5)";

/// Shared filter predicate for public listings. URL is not searched.
const PUBLIC_WHERE: &str = "status = 'active' AND is_public = TRUE \
     AND ($1::text IS NULL OR category ILIKE $1) \
     AND ($2::text IS NULL OR tags ILIKE $2) \
     AND ($3::text IS NULL OR title ILIKE $3 OR description ILIKE $3)";

const ORDER_BY: &str = "ORDER BY created_at DESC, id DESC";

/// Row predicate for `scope`. When the scope names a user, the predicate
/// refers to it as `$n` and the user is returned for binding.
fn scope_predicate(scope: AccessScope, n: usize) -> (String, Option<UserId>) {
    match scope {
        AccessScope::Anyone => ("TRUE".to_string(), None),
        AccessScope::Public => ("is_public = TRUE".to_string(), None),
        AccessScope::Owner(user) => (format!("owner_id = ${n}"), Some(user)),
        AccessScope::OwnerOrPublic(user) => {
            (format!("(owner_id = ${n} OR is_public = TRUE)"), Some(user))
        }
    }
}

/// Repository for resource CRUD and listing queries.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

/// Filter values ready to bind as `ILIKE` patterns.
struct FilterPatterns {
    category: Option<String>,
    tags: Option<String>,
    search: Option<String>,
}

impl FilterPatterns {
    fn from_filter(filter: &ResourceFilter) -> Self {
        Self {
            category: filter.category.as_deref().map(contains_pattern),
            tags: filter.tags.as_deref().map(contains_pattern),
            search: filter.search.as_deref().map(contains_pattern),
        }
    }
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for ResourceRepository {
    async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (owner_id, title, url, description, category, tags, is_public) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.url)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.tags)
        .bind(data.is_public)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    async fn find_by_id_scoped(
        &self,
        id: ResourceId,
        scope: AccessScope,
    ) -> AppResult<Option<Resource>> {
        let (predicate, user) = scope_predicate(scope, 2);
        let sql = format!("SELECT * FROM resources WHERE id = $1 AND status = 'active' AND {predicate}");

        let mut query = sqlx::query_as::<_, Resource>(&sql).bind(id);
        if let Some(user) = user {
            query = query.bind(user);
        }

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find resource", e))
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>> {
        let patterns = FilterPatterns::from_filter(filter);

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM resources WHERE {OWNED_WHERE}"))
            .bind(owner)
            .bind(&patterns.category)
            .bind(&patterns.tags)
            .bind(&patterns.search)
            .bind(filter.is_public)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count resources", e))?;

        let resources = sqlx::query_as::<_, Resource>(&format!(
            "SELECT * FROM resources WHERE {OWNED_WHERE} {ORDER_BY} LIMIT $6 OFFSET $7"
        ))
        .bind(owner)
        .bind(&patterns.category)
        .bind(&patterns.tags)
        .bind(&patterns.search)
        .bind(filter.is_public)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))?;

        Ok(Page::new(resources, total as u64, page))
    }

    async fn find_public(
        &self,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> AppResult<Page<Resource>> {
        let patterns = FilterPatterns::from_filter(filter);

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM resources WHERE {PUBLIC_WHERE}"))
            .bind(&patterns.category)
            .bind(&patterns.tags)
            .bind(&patterns.search)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count public resources", e)
            })?;

        let resources = sqlx::query_as::<_, Resource>(&format!(
            "SELECT * FROM resources WHERE {PUBLIC_WHERE} {ORDER_BY} LIMIT $4 OFFSET $5"
        ))
        .bind(&patterns.category)
        .bind(&patterns.tags)
        .bind(&patterns.search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list public resources", e)
        })?;

        Ok(Page::new(resources, total as u64, page))
    }

    async fn update_scoped(
        &self,
        id: ResourceId,
        scope: AccessScope,
        patch: &ResourcePatch,
    ) -> AppResult<Option<Resource>> {
        let (predicate, user) = scope_predicate(scope, 8);
        let sql = format!(
            "UPDATE resources SET \
             title = COALESCE($2, title), \
             url = COALESCE($3, url), \
             description = COALESCE($4, description), \
             category = COALESCE($5, category), \
             tags = COALESCE($6, tags), \
             is_public = COALESCE($7, is_public), \
             updated_at = NOW() \
             WHERE id = $1 AND status = 'active' AND {predicate} \
             RETURNING *"
        );

        let mut query = sqlx::query_as::<_, Resource>(&sql)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.url)
            .bind(&patch.description)
            .bind(&patch.category)
            .bind(&patch.tags)
            .bind(patch.is_public);
        if let Some(user) = user {
            query = query.bind(user);
        }

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update resource", e))
    }

    async fn soft_delete_scoped(&self, id: ResourceId, scope: AccessScope) -> AppResult<bool> {
        let (predicate, user) = scope_predicate(scope, 2);
        let sql = format!(
            "UPDATE resources SET status = 'deleted', deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = 'active' AND {predicate}"
        );

        let mut query = sqlx::query(&sql).bind(id);
        if let Some(user) = user {
            query = query.bind(user);
        }

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete resource", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, id: ResourceId, scope: AccessScope) -> AppResult<()> {
        let (predicate, user) = scope_predicate(scope, 2);
        let sql = format!(
            "UPDATE resources SET click_count = click_count + 1 \
             WHERE id = $1 AND status = 'active' AND {predicate}"
        );

        let mut query = sqlx::query(&sql).bind(id);
        if let Some(user) = user {
            query = query.bind(user);
        }

        query
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to track click", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_predicate_numbers_owner_param() {
        let ann = UserId::new(1);
        assert_eq!(scope_predicate(AccessScope::Anyone, 2), ("TRUE".to_string(), None));
        assert_eq!(
            scope_predicate(AccessScope::Owner(ann), 8),
            ("owner_id = $8".to_string(), Some(ann))
        );
        assert_eq!(
            scope_predicate(AccessScope::OwnerOrPublic(ann), 2),
            ("(owner_id = $2 OR is_public = TRUE)".to_string(), Some(ann))
        );
        assert_eq!(scope_predicate(AccessScope::Public, 2).1, None);
    }
}
