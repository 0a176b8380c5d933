//! Resource entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use devlink_core::types::{ResourceId, UserId};

use crate::status::RecordStatus;

/// A bookmarked link owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Store-assigned identifier.
    pub id: ResourceId,
    /// Link title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Free-text description.
    pub description: String,
    /// Free-text category label.
    pub category: String,
    /// Raw tags text; not parsed into a set.
    pub tags: String,
    /// Whether non-owners may read this resource.
    pub is_public: bool,
    /// Number of recorded clicks. Only ever incremented.
    pub click_count: i64,
    /// Owning user.
    pub owner_id: UserId,
    /// Lifecycle status.
    pub status: RecordStatus,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
    /// When the resource was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the resource was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Data required to create a resource. The owner comes from the caller's
/// identity, never from the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    /// Owning user.
    pub owner_id: UserId,
    /// Link title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Raw tags text.
    pub tags: String,
    /// Visibility flag.
    pub is_public: bool,
}
