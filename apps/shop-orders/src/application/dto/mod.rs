//! Data Transfer Objects
//!
//! Flat, serializable views of domain values for output boundaries.

mod order_dto;

pub use order_dto::OrderDto;
