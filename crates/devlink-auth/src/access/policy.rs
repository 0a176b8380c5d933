//! Access decisions for resource operations.
//!
//! Rules:
//! - reads are allowed to the owner, or to anyone when the resource is public;
//! - updates and deletes are allowed to the owner only;
//! - click tracking is allowed to every caller, authenticated or not;
//! - "my resources" listings see the caller's rows, public listings see
//!   public rows of every owner.
//!
//! A denied single-resource operation is reported as not found so that
//! non-owners cannot discover private ids.

use serde::{Deserialize, Serialize};

use devlink_core::error::AppError;
use devlink_core::types::UserId;
use devlink_entity::AccessScope;

/// An operation a caller attempts on resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Fetch one resource.
    Read,
    /// Partially update one resource.
    Update,
    /// Soft-delete one resource.
    Delete,
    /// Increment the click counter.
    Click,
    /// List the caller's own resources.
    ListOwned,
    /// List public resources.
    ListPublic,
}

/// Stateless access-control policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// The row scope a store must apply for `operation` by `caller`.
    ///
    /// Fails with `Unauthorized` when the operation needs an identity and
    /// none was supplied.
    pub fn scope_for(
        &self,
        caller: Option<UserId>,
        operation: Operation,
    ) -> Result<AccessScope, AppError> {
        match (operation, caller) {
            (Operation::Click, _) => Ok(AccessScope::Anyone),
            (Operation::ListPublic, _) => Ok(AccessScope::Public),
            (Operation::Read, Some(user)) => Ok(AccessScope::OwnerOrPublic(user)),
            (Operation::Read, None) => Ok(AccessScope::Public),
            (Operation::Update | Operation::Delete | Operation::ListOwned, Some(user)) => {
                Ok(AccessScope::Owner(user))
            }
            (Operation::Update | Operation::Delete | Operation::ListOwned, None) => {
                Err(AppError::unauthorized("Authentication required"))
            }
        }
    }
}
