//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use devlink_core::types::{Page, ResourceId, UserId};
use devlink_entity::{Resource, User};

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Registration and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The account.
    pub user: UserResponse,
    /// Bearer token valid for 24 hours.
    pub token: String,
}

/// Identity echoed from a validated token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// User ID from the token.
    pub user_id: UserId,
    /// Email from the token.
    pub email: String,
    /// Message.
    pub message: String,
}

/// Detailed health check response, including storage reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// `"ok"`, or `"degraded"` when storage is unreachable.
    pub status: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
    /// Configured storage provider.
    pub provider: String,
}

/// Resource representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    /// Resource ID.
    pub id: ResourceId,
    /// Title.
    pub title: String,
    /// URL.
    pub url: String,
    /// Description.
    pub description: String,
    /// Category.
    pub category: String,
    /// Tags.
    pub tags: String,
    /// Visibility.
    pub is_public: bool,
    /// Click count.
    pub click_count: i64,
    /// Owner.
    pub user_id: UserId,
    /// Created at (RFC 3339, UTC).
    pub created_at: DateTime<Utc>,
    /// Updated at (RFC 3339, UTC).
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceResponse {
    fn from(r: Resource) -> Self {
        Self {
            id: r.id,
            title: r.title,
            url: r.url,
            description: r.description,
            category: r.category,
            tags: r.tags,
            is_public: r.is_public,
            click_count: r.click_count,
            user_id: r.owner_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Paginated resource listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceListResponse {
    /// Items in this page.
    pub resources: Vec<ResourceResponse>,
    /// Matching items before pagination.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total pages.
    pub pages: u64,
}

impl From<Page<Resource>> for ResourceListResponse {
    fn from(page: Page<Resource>) -> Self {
        let pages = page.pages();
        let page = page.map(ResourceResponse::from);
        Self {
            resources: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            pages,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Message.
    pub message: String,
}
