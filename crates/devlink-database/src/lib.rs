//! # devlink-database
//!
//! Storage for DevLink: the store traits consumed by the service layer,
//! PostgreSQL repositories, an in-memory implementation, connection
//! management, and provider selection.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::Database;
pub use store::{ResourceStore, UserStore};
