//! Order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::{Order, OrderStatus};

/// DTO representing an order row joined to its member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order ID.
    pub order_id: i64,
    /// Member ID.
    pub member_id: i64,
    /// Member name.
    pub member_name: String,
    /// Status.
    pub status: OrderStatus,
    /// Order date.
    pub order_date: DateTime<Utc>,
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id().value(),
            member_id: order.member().id().value(),
            member_name: order.member().name().to_string(),
            status: order.status(),
            order_date: order.order_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::Member;
    use crate::domain::shared::{MemberId, OrderId};
    use chrono::TimeZone;

    #[test]
    fn dto_flattens_member() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let order = Order::new(
            OrderId::new(3),
            Member::new(MemberId::new(8), "Bobby"),
            OrderStatus::Ordered,
            date,
        );

        let dto = OrderDto::from(&order);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["order_id"], 3);
        assert_eq!(json["member_id"], 8);
        assert_eq!(json["member_name"], "Bobby");
        assert_eq!(json["status"], "ORDERED");
        assert_eq!(json["order_date"], "2024-05-01T12:00:00Z");
    }
}
