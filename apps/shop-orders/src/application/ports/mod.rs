//! Application Ports (Driven)
//!
//! Ports define how the application uses the store:
//! - `PersistenceContext`: identity-based persist / find, per entity type
//! - `OrderQueryPort`: executes a typed `OrderQuery`

mod persistence_port;
mod query_port;

pub use persistence_port::{PersistenceContext, StoreError};
pub use query_port::OrderQueryPort;
