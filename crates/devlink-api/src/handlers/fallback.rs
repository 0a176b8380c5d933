//! Handler for unmatched routes.

use devlink_core::error::AppError;

/// Any unknown path.
pub async fn not_found() -> AppError {
    AppError::not_found("API endpoint not found")
}
