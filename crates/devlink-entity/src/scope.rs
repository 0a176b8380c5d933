//! Row-level visibility scopes.
//!
//! A scope is the implicit predicate a store applies before any
//! user-supplied filter. Combining existence and authorization into one
//! predicate is what lets a denied lookup look exactly like a missing row.

use serde::{Deserialize, Serialize};

use devlink_core::types::UserId;

/// Which rows a store operation may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessScope {
    /// Any active row (click tracking).
    Anyone,
    /// Rows owned by the given user (writes, "my resources").
    Owner(UserId),
    /// Rows owned by the given user or marked public (single reads).
    OwnerOrPublic(UserId),
    /// Public rows regardless of owner.
    Public,
}

impl AccessScope {
    /// Evaluate the scope against a row's ownership and visibility.
    pub fn permits(&self, owner_id: UserId, is_public: bool) -> bool {
        match self {
            Self::Anyone => true,
            Self::Owner(user) => *user == owner_id,
            Self::OwnerOrPublic(user) => *user == owner_id || is_public,
            Self::Public => is_public,
        }
    }
}
