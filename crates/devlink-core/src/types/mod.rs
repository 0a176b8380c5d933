//! Shared domain types used across DevLink crates.

pub mod id;
pub mod pagination;

pub use id::{ResourceId, UserId};
pub use pagination::{Page, PageRequest};
