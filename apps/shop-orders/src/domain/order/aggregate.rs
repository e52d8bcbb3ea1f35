//! Order aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::domain::member::Member;
use crate::domain::shared::{Entity, OrderId};

/// An order together with the member that placed it.
///
/// The member is always resolved: an `Order` value cannot exist without one,
/// which is what makes the order/member join an inner join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    member: Member,
    status: OrderStatus,
    order_date: DateTime<Utc>,
}

impl Order {
    /// Create an order with an explicit status and timestamp.
    #[must_use]
    pub const fn new(
        id: OrderId,
        member: Member,
        status: OrderStatus,
        order_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            member,
            status,
            order_date,
        }
    }

    /// Create a freshly placed order, stamped with the current time.
    #[must_use]
    pub fn place(id: OrderId, member: Member) -> Self {
        Self::new(id, member, OrderStatus::Ordered, Utc::now())
    }

    /// The same order with `status`.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Order ID.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Member who placed the order.
    #[must_use]
    pub const fn member(&self) -> &Member {
        &self.member
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// When the order was placed.
    #[must_use]
    pub const fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }
}

impl Entity for Order {
    type Id = OrderId;

    const NAME: &'static str = "order";

    fn entity_id(&self) -> &OrderId {
        &self.id
    }
}
