//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devlink_auth::Claims;
use devlink_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the API layer from validated token claims and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Email from the token claims.
    pub email: String,
    /// Token id, for log correlation.
    pub token_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context from validated claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email.clone(),
            token_id: claims.jti,
            request_time: Utc::now(),
        }
    }
}
