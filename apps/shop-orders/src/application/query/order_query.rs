//! Bounded order query.
//!
//! Always selects orders inner-joined to their members. Predicates form a
//! conjunction; an empty conjunction matches every row.

use serde::{Deserialize, Serialize};

use super::Predicate;
use crate::domain::order::Order;

/// Ordering applied before the result limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrdering {
    /// Whatever order the store yields rows in. Which rows survive the
    /// limit is then store-dependent.
    #[default]
    Storage,
    /// Ascending order ID.
    IdAscending,
}

/// Select of orders joined to members, filtered and capped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    predicates: Vec<Predicate>,
    limit: Option<usize>,
    ordering: ResultOrdering,
}

impl OrderQuery {
    /// All orders, unfiltered and unbounded.
    #[must_use]
    pub fn orders() -> Self {
        Self::default()
    }

    /// AND in every present predicate; absent ones are skipped.
    #[must_use]
    pub fn filter<I>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Option<Predicate>>,
    {
        self.predicates.extend(predicates.into_iter().flatten());
        self
    }

    /// Cap the number of returned rows.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the ordering applied before the cap.
    #[must_use]
    pub fn order_by(mut self, ordering: ResultOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Predicates in the conjunction.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Row cap, if any.
    #[must_use]
    pub const fn max_results(&self) -> Option<usize> {
        self.limit
    }

    /// Ordering before the cap.
    #[must_use]
    pub const fn ordering(&self) -> ResultOrdering {
        self.ordering
    }

    /// Whether `order` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(order))
    }
}
