//! In-memory store implementations backed by `dashmap`.
//!
//! Used by tests and for running the server without PostgreSQL. Data is
//! lost when the process exits.

pub mod resource;
pub mod user;

pub use resource::MemoryResourceStore;
pub use user::MemoryUserStore;

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic id generator mirroring a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub(crate) struct Sequence(AtomicI64);

impl Sequence {
    /// Return the next id, starting at 1.
    pub(crate) fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}
