//! Typed predicates over orders and their members.

use super::LikePattern;
use crate::domain::order::{Order, OrderStatus};

/// A boolean condition on an order row joined to its member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `order.status = ?`
    StatusEq(OrderStatus),
    /// `member.name LIKE ? ESCAPE '\'`
    MemberNameLike(LikePattern),
}

impl Predicate {
    /// Predicate matching orders with `status`, if one is given.
    #[must_use]
    pub fn status_eq(status: Option<OrderStatus>) -> Option<Self> {
        status.map(Self::StatusEq)
    }

    /// Predicate matching member names against `pattern`, if one is given.
    #[must_use]
    pub fn member_name_like(pattern: Option<LikePattern>) -> Option<Self> {
        pattern.map(Self::MemberNameLike)
    }

    /// Evaluate against an order in memory.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::StatusEq(status) => order.status() == *status,
            Self::MemberNameLike(pattern) => pattern.matches(order.member().name()),
        }
    }
}
