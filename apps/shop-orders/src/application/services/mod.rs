//! Application Services
//!
//! Services are stateless beyond their settings; every call receives the
//! persistence context it should run against.

mod order_query_service;

pub use order_query_service::{MAX_RESULTS, OrderQueryService};
