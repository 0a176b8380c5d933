//! # devlink-entity
//!
//! Domain entity models for DevLink. Every struct in this crate represents
//! a database table row or a domain value object. Row types additionally
//! derive `sqlx::FromRow`.

pub mod resource;
pub mod scope;
pub mod status;
pub mod user;

pub use resource::{CreateResource, Resource, ResourceFilter, ResourcePatch};
pub use scope::AccessScope;
pub use status::RecordStatus;
pub use user::{CreateUser, User};
