//! Listing filters for resources.

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::scope::AccessScope;

/// Optional, independently composable listing filters. All present filters
/// must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFilter {
    /// Case-insensitive substring of the category.
    pub category: Option<String>,
    /// Case-insensitive substring of the raw tags text.
    pub tags: Option<String>,
    /// Case-insensitive substring of title, description, or (owned listings
    /// only) URL.
    pub search: Option<String>,
    /// Exact visibility match. Ignored for public listings.
    pub is_public: Option<bool>,
}

impl ResourceFilter {
    /// Drop empty text filters so they count as absent. Anything else,
    /// surrounding whitespace included, is matched literally.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            category: clean(self.category),
            tags: clean(self.tags),
            search: clean(self.search),
            is_public: self.is_public,
        }
    }

    /// Whether `search` should also look at the URL within `scope`.
    pub fn searches_url(scope: &AccessScope) -> bool {
        !matches!(scope, AccessScope::Public)
    }

    /// Whether the `is_public` filter applies within `scope`.
    pub fn visibility_applies(scope: &AccessScope) -> bool {
        !matches!(scope, AccessScope::Public)
    }

    /// Evaluate the filter against an in-memory resource.
    pub fn matches(&self, resource: &Resource, scope: &AccessScope) -> bool {
        if let Some(category) = &self.category {
            if !contains_ignore_case(&resource.category, category) {
                return false;
            }
        }
        if let Some(tags) = &self.tags {
            if !contains_ignore_case(&resource.tags, tags) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let hit = contains_ignore_case(&resource.title, search)
                || contains_ignore_case(&resource.description, search)
                || (Self::searches_url(scope) && contains_ignore_case(&resource.url, search));
            if !hit {
                return false;
            }
        }
        if let Some(is_public) = self.is_public {
            if Self::visibility_applies(scope) && resource.is_public != is_public {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use devlink_core::types::{ResourceId, UserId};

    use super::*;
    use crate::status::RecordStatus;

    fn resource(title: &str, url: &str, is_public: bool) -> Resource {
        let now = Utc::now();
        Resource {
            id: ResourceId::new(1),
            title: title.into(),
            url: url.into(),
            description: "Reference material".into(),
            category: "Programming".into(),
            tags: "rust,async".into(),
            is_public,
            click_count: 0,
            owner_id: UserId::new(1),
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_case_insensitive_substrings() {
        let r = resource("Tokio Guide", "https://tokio.rs", true);
        let owned = AccessScope::Owner(UserId::new(1));
        let filter = ResourceFilter {
            category: Some("PROG".into()),
            tags: Some("Async".into()),
            ..Default::default()
        };
        assert!(filter.matches(&r, &owned));
    }

    #[test]
    fn test_search_url_only_in_owned_scope() {
        let r = resource("Guide", "https://tokio.rs", true);
        let filter = ResourceFilter {
            search: Some("tokio.rs".into()),
            ..Default::default()
        };
        assert!(filter.matches(&r, &AccessScope::Owner(UserId::new(1))));
        assert!(!filter.matches(&r, &AccessScope::Public));
    }

    #[test]
    fn test_visibility_ignored_for_public_scope() {
        let r = resource("Guide", "https://tokio.rs", true);
        let filter = ResourceFilter {
            is_public: Some(false),
            ..Default::default()
        };
        assert!(!filter.matches(&r, &AccessScope::Owner(UserId::new(1))));
        assert!(filter.matches(&r, &AccessScope::Public));
    }

    #[test]
    fn test_normalized_drops_only_empty_values() {
        let filter = ResourceFilter {
            category: Some(String::new()),
            tags: Some("  ".into()),
            search: Some(" rust ".into()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(filter.category, None);
        assert_eq!(filter.tags.as_deref(), Some("  "));
        assert_eq!(filter.search.as_deref(), Some(" rust "));
    }
}
