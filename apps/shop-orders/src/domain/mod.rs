//! Domain Layer
//!
//! Core business types with no infrastructure dependencies.
//!
//! - `shared`: Identifiers and the `Entity` abstraction
//! - `member`: Order owners
//! - `order`: Order aggregate, status, and search criteria

pub mod member;
pub mod order;
pub mod shared;
