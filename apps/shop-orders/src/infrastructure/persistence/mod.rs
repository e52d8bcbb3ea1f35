//! Persistence Adapters
//!
//! Implementations of `PersistenceContext` and `OrderQueryPort`.

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemorySession;
pub use sqlite::SqliteSession;
