//! Application Layer
//!
//! The application layer orchestrates domain types through services.
//! It defines:
//!
//! - **Ports**: Interfaces for the persistence context and query execution
//! - **Query**: Typed predicates and the bounded order query
//! - **Services**: `OrderQueryService`
//! - **DTOs**: Data transfer objects for output boundaries

pub mod dto;
pub mod ports;
pub mod query;
pub mod services;

pub use dto::*;
pub use ports::*;
pub use query::*;
pub use services::*;
