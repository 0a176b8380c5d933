//! Convenience result type alias for DevLink.

use crate::error::AppError;

/// A specialized `Result` type for DevLink operations.
pub type AppResult<T> = Result<T, AppError>;
