//! Typed query model for order listings.
//!
//! Filters are built as `Option<Predicate>` values; absent ones never enter
//! the query, so an unset filter adds no constraint.

mod like_pattern;
mod order_query;
mod predicate;

pub use like_pattern::{LIKE_ESCAPE, LikePattern, NameMatch};
pub use order_query::{OrderQuery, ResultOrdering};
pub use predicate::Predicate;
