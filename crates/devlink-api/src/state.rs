//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use devlink_auth::jwt::{JwtDecoder, JwtEncoder};
use devlink_auth::password::{PasswordHasher, PasswordValidator};
use devlink_core::config::AppConfig;
use devlink_core::result::AppResult;
use devlink_database::Database;
use devlink_service::{AuthService, ResourceService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Configured stores (PostgreSQL or in-memory)
    pub database: Database,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Resource CRUD, listings, and clicks
    pub resource_service: Arc<ResourceService>,
}

impl AppState {
    /// Wires auth primitives and services on top of `database`.
    pub fn new(config: AppConfig, database: Database) -> AppResult<Self> {
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            database.users(),
            password_hasher,
            password_validator,
            jwt_encoder,
        ));
        let resource_service = Arc::new(ResourceService::new(database.resources()));

        Ok(Self {
            config: Arc::new(config),
            database,
            jwt_decoder,
            auth_service,
            resource_service,
        })
    }
}
