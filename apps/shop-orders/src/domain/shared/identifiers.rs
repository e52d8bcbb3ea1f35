//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different tables.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new identifier from its numeric value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the inner numeric value.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(OrderId, "Unique identifier for an order.");
define_id!(MemberId, "Unique identifier for a member.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_new_and_display() {
        let id = OrderId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn ids_convert_from_and_into_i64() {
        let id: MemberId = 7.into();
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn order_ids_sort_numerically() {
        let mut ids = vec![OrderId::new(10), OrderId::new(2), OrderId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![OrderId::new(2), OrderId::new(7), OrderId::new(10)]);
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&OrderId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: OrderId = serde_json::from_str("3").unwrap();
        assert_eq!(back, OrderId::new(3));
    }
}
