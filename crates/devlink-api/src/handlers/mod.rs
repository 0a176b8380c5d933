//! Route handlers organized by domain.

pub mod auth;
pub mod fallback;
pub mod health;
pub mod resource;
