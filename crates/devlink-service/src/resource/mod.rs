//! Resource (bookmark) management.

pub mod service;

pub use service::{NewResource, ResourceService};
