//! Resource (bookmark) domain entities.

pub mod filter;
pub mod model;
pub mod patch;

pub use filter::ResourceFilter;
pub use model::{CreateResource, Resource};
pub use patch::ResourcePatch;
