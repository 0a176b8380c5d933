//! Store provider selection.

use std::sync::Arc;

use tracing::info;

use devlink_core::config::DatabaseConfig;
use devlink_core::error::AppError;
use devlink_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryResourceStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{ResourceRepository, UserRepository};
use crate::store::{ResourceStore, UserStore};

/// The configured set of stores.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct Database {
    users: Arc<dyn UserStore>,
    resources: Arc<dyn ResourceStore>,
    /// Present only for the PostgreSQL provider.
    pool: Option<DatabasePool>,
}

impl Database {
    /// Open the stores named by `config.provider`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store provider");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    users: Arc::new(UserRepository::new(pool.pool().clone())),
                    resources: Arc::new(ResourceRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Initializing in-memory store provider");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Create empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            resources: Arc::new(MemoryResourceStore::new()),
            pool: None,
        }
    }

    /// The user store.
    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    /// The resource store.
    pub fn resources(&self) -> Arc<dyn ResourceStore> {
        Arc::clone(&self.resources)
    }

    /// Check storage connectivity. Always healthy for the memory provider.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release pooled connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use devlink_core::error::ErrorKind;

    use super::*;

    #[tokio::test]
    async fn test_unknown_provider_is_configuration_error() {
        let config = DatabaseConfig {
            provider: "sqlite".into(),
            ..Default::default()
        };
        let err = Database::connect(&config).await.expect_err("must fail");
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_memory_provider_is_healthy() {
        let config = DatabaseConfig {
            provider: "memory".into(),
            ..Default::default()
        };
        let db = Database::connect(&config).await.expect("memory");
        assert!(db.health_check().await.expect("health"));
    }
}
