//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use devlink_entity::ResourcePatch;
use devlink_service::NewResource;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    pub name: String,
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create resource request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResourceRequest {
    /// Title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// URL.
    #[validate(url(message = "A valid URL is required"))]
    pub url: String,
    /// Description.
    pub description: Option<String>,
    /// Category.
    pub category: Option<String>,
    /// Tags.
    pub tags: Option<String>,
    /// Visibility; private when omitted.
    pub is_public: Option<bool>,
}

impl From<CreateResourceRequest> for NewResource {
    fn from(req: CreateResourceRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            description: req.description,
            category: req.category,
            tags: req.tags,
            is_public: req.is_public,
        }
    }
}

/// Update resource request body. Omitted fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateResourceRequest {
    /// New title.
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    /// New URL.
    #[validate(url(message = "A valid URL is required"))]
    pub url: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New tags.
    pub tags: Option<String>,
    /// New visibility.
    pub is_public: Option<bool>,
}

impl From<UpdateResourceRequest> for ResourcePatch {
    fn from(req: UpdateResourceRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            description: req.description,
            category: req.category,
            tags: req.tags,
            is_public: req.is_public,
        }
    }
}
