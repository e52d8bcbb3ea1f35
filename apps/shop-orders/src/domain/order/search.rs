//! Order search criteria.

use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// Criteria for listing orders. Both filters are optional.
///
/// Built per request and discarded once the query has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSearch {
    /// Member name to match against.
    #[serde(default)]
    pub member_name: Option<String>,
    /// Exact status to match.
    #[serde(default)]
    pub order_status: Option<OrderStatus>,
}

impl OrderSearch {
    /// Criteria with no filters (matches every order).
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.order_status = Some(status);
        self
    }

    /// Restrict by member name.
    #[must_use]
    pub fn with_member_name(mut self, name: impl Into<String>) -> Self {
        self.member_name = Some(name.into());
        self
    }

    /// Member name if it has any non-whitespace content.
    #[must_use]
    pub fn member_name_text(&self) -> Option<&str> {
        self.member_name
            .as_deref()
            .filter(|name| name.chars().any(|c| !c.is_whitespace()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_have_no_text() {
        assert_eq!(OrderSearch::all().member_name_text(), None);
        assert_eq!(OrderSearch::all().with_member_name("").member_name_text(), None);
        assert_eq!(
            OrderSearch::all().with_member_name(" \t\n").member_name_text(),
            None
        );
    }

    #[test]
    fn names_keep_surrounding_whitespace() {
        let search = OrderSearch::all().with_member_name(" Bob ");
        assert_eq!(search.member_name_text(), Some(" Bob "));
    }

    #[test]
    fn deserializes_partial_criteria() {
        let search: OrderSearch = serde_json::from_str(r#"{"order_status":"CANCELED"}"#).unwrap();
        assert_eq!(search, OrderSearch::all().with_status(OrderStatus::Canceled));
    }
}
