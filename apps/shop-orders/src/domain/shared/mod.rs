//! Shared domain building blocks.

mod entity;
mod identifiers;

pub use entity::Entity;
pub use identifiers::{MemberId, OrderId};
