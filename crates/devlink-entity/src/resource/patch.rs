//! Partial update for a resource.

use serde::{Deserialize, Serialize};

/// Field-level changes to a resource.
///
/// `None` means the field was absent from the request and keeps its stored
/// value; `Some("")` and `Some(false)` are real assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePatch {
    /// New title.
    pub title: Option<String>,
    /// New URL.
    pub url: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New tags text.
    pub tags: Option<String>,
    /// New visibility flag.
    pub is_public: Option<bool>,
}

impl ResourcePatch {
    /// Check whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.is_public.is_none()
    }

    /// Apply the present fields to `resource`. Returns `true` if any field was set.
    pub fn apply_to(&self, resource: &mut super::Resource) -> bool {
        if let Some(title) = &self.title {
            resource.title.clone_from(title);
        }
        if let Some(url) = &self.url {
            resource.url.clone_from(url);
        }
        if let Some(description) = &self.description {
            resource.description.clone_from(description);
        }
        if let Some(category) = &self.category {
            resource.category.clone_from(category);
        }
        if let Some(tags) = &self.tags {
            resource.tags.clone_from(tags);
        }
        if let Some(is_public) = self.is_public {
            resource.is_public = is_public;
        }
        !self.is_empty()
    }
}
