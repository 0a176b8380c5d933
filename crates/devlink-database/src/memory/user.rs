//! In-memory user store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use devlink_core::error::AppError;
use devlink_core::result::AppResult;
use devlink_core::types::UserId;
use devlink_entity::{CreateUser, RecordStatus, User};

use super::Sequence;
use crate::store::UserStore;

/// User store holding rows in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<UserId, User>>,
    /// Lowercased email of every active user, for atomic uniqueness.
    emails: Arc<DashMap<String, UserId>>,
    ids: Arc<Sequence>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .get(&id)
            .filter(|user| user.status.is_active())
            .map(|user| user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(&email.to_lowercase()).map(|id| *id) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        match self.emails.entry(data.email.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already registered")),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: UserId::new(self.ids.next()),
                    name: data.name.clone(),
                    email: data.email.clone(),
                    password_hash: data.password_hash.clone(),
                    status: RecordStatus::Active,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                };
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                debug!(user_id = %user.id, "Stored user in memory");
                Ok(user)
            }
        }
    }
}
