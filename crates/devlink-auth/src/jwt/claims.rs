//! JWT claims carried by every session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devlink_core::types::UserId;

/// Identity claims embedded in a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user.
    pub user_id: UserId,
    /// Email at the time of issuance.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Random token id, used only for log correlation.
    pub jti: Uuid,
}
