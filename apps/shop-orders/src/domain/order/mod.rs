//! Order Domain
//!
//! The order aggregate, its status enumeration, and the search criteria
//! used to list orders.

pub mod aggregate;
pub mod order_status;
pub mod search;

pub use aggregate::Order;
pub use order_status::{OrderStatus, ParseOrderStatusError};
pub use search::OrderSearch;
