//! Registration, login, and session token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use devlink_auth::jwt::{IssuedToken, JwtEncoder};
use devlink_auth::password::{PasswordHasher, PasswordValidator};
use devlink_core::error::AppError;
use devlink_core::result::AppResult;
use devlink_database::store::UserStore;
use devlink_entity::{CreateUser, User};

/// Message for every failed login, whatever the cause.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Minimum display name length, in characters.
const NAME_MIN_LENGTH: usize = 2;

/// A user together with a freshly issued session token.
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// The authenticated user.
    pub user: User,
    /// The signed session token.
    pub token: IssuedToken,
}

/// Handles account creation and credential checks.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
        }
    }

    /// Creates an account. Fails with `Conflict` if an active user already
    /// has the email, and with `Validation` if the name or password break
    /// policy.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        if name.chars().count() < NAME_MIN_LENGTH {
            return Err(AppError::validation(format!(
                "Name must be at least {NAME_MIN_LENGTH} characters long"
            )));
        }
        self.validator.validate(password)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let hasher = Arc::clone(&self.hasher);
        let plaintext = password.to_string();
        let password_hash = run_blocking(move || hasher.hash_password(&plaintext)).await?;

        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues a session token.
    ///
    /// An unknown email and a wrong password produce the same error, and
    /// both pay for one Argon2 verification.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResult> {
        let user = self.users.find_by_email(email).await?;

        let hasher = Arc::clone(&self.hasher);
        let plaintext = password.to_string();
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified = run_blocking(move || match stored_hash {
            Some(hash) => hasher.verify_password(&plaintext, &hash),
            None => hasher.verify_dummy(&plaintext),
        })
        .await?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!("Login failed");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        let token = self.issue_token(&user)?;
        info!(user_id = %user.id, token_id = %token.claims.jti, "Login successful");
        Ok(AuthResult { user, token })
    }

    /// Issues a 24-hour session token for `user`.
    pub fn issue_token(&self, user: &User) -> AppResult<IssuedToken> {
        self.encoder.issue(user.id, &user.email)
    }
}

/// Runs CPU-bound password work off the async workers.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Password task failed: {e}")))?
}
