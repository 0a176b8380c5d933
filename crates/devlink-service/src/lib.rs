//! # devlink-service
//!
//! Business logic service layer for DevLink. Each service orchestrates
//! stores and auth primitives to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. The caller's identity is
//! passed explicitly as a [`RequestContext`].

pub mod auth;
pub mod context;
pub mod resource;

pub use auth::{AuthResult, AuthService};
pub use context::RequestContext;
pub use resource::{NewResource, ResourceService};
