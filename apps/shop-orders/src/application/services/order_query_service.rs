//! Order Query Service
//!
//! Saves orders, loads them by ID, and lists them by optional criteria.
//! Store failures are returned exactly as the context reported them.

use tracing::debug;

use crate::application::ports::{OrderQueryPort, PersistenceContext, StoreError};
use crate::application::query::{LikePattern, NameMatch, OrderQuery, Predicate, ResultOrdering};
use crate::domain::order::{Order, OrderSearch};
use crate::domain::shared::OrderId;

/// Hard cap on rows returned by [`OrderQueryService::find_all`].
pub const MAX_RESULTS: usize = 1000;

/// Order persistence and search over a caller-supplied context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQueryService {
    name_match: NameMatch,
    ordering: ResultOrdering,
}

impl OrderQueryService {
    /// Create a service with explicit name matching and ordering.
    #[must_use]
    pub const fn new(name_match: NameMatch, ordering: ResultOrdering) -> Self {
        Self {
            name_match,
            ordering,
        }
    }

    /// Register a new order with the context.
    pub async fn save<C>(&self, ctx: &C, order: &Order) -> Result<(), StoreError>
    where
        C: PersistenceContext<Order> + ?Sized,
    {
        debug!(order_id = %order.id(), member_id = %order.member().id(), "Saving order");
        ctx.persist(order).await
    }

    /// Load one order. An unknown ID yields `Ok(None)`.
    pub async fn find_one<C>(&self, ctx: &C, id: OrderId) -> Result<Option<Order>, StoreError>
    where
        C: PersistenceContext<Order> + ?Sized,
    {
        ctx.find(&id).await
    }

    /// List orders matching `search`, at most [`MAX_RESULTS`].
    pub async fn find_all<Q>(
        &self,
        ctx: &Q,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, StoreError>
    where
        Q: OrderQueryPort + ?Sized,
    {
        let query = self.search_query(search);
        let orders = ctx.fetch(&query).await?;
        debug!(
            predicates = query.predicates().len(),
            returned = orders.len(),
            "Order search completed"
        );
        Ok(orders)
    }

    /// Query that [`find_all`](Self::find_all) runs for `search`.
    #[must_use]
    pub fn search_query(&self, search: &OrderSearch) -> OrderQuery {
        OrderQuery::orders()
            .filter([
                Predicate::status_eq(search.order_status),
                self.name_like(search.member_name_text()),
            ])
            .limit(MAX_RESULTS)
            .order_by(self.ordering)
    }

    fn name_like(&self, name: Option<&str>) -> Option<Predicate> {
        Predicate::member_name_like(name.map(|name| LikePattern::for_name(name, self.name_match)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::Member;
    use crate::domain::order::OrderStatus;
    use crate::domain::shared::MemberId;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Session {}

        #[async_trait]
        impl PersistenceContext<Order> for Session {
            async fn persist(&self, entity: &Order) -> Result<(), StoreError>;
            async fn find(&self, id: &OrderId) -> Result<Option<Order>, StoreError>;
        }

        #[async_trait]
        impl OrderQueryPort for Session {
            async fn fetch(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError>;
        }
    }

    fn make_order(id: i64, name: &str) -> Order {
        Order::place(OrderId::new(id), Member::new(MemberId::new(id), name))
    }

    #[test]
    fn unset_criteria_build_unfiltered_capped_query() {
        let query = OrderQueryService::default().search_query(&OrderSearch::all());
        assert!(query.predicates().is_empty());
        assert_eq!(query.max_results(), Some(MAX_RESULTS));
        assert_eq!(query.ordering(), ResultOrdering::Storage);
    }

    #[test]
    fn blank_name_adds_no_predicate() {
        let service = OrderQueryService::default();
        for blank in ["", "   ", "\t\n"] {
            let query = service.search_query(&OrderSearch::all().with_member_name(blank));
            assert!(query.predicates().is_empty(), "blank name {blank:?} filtered");
        }
    }

    #[test]
    fn both_criteria_build_conjunction() {
        let search = OrderSearch::all()
            .with_status(OrderStatus::Ordered)
            .with_member_name("Bob");
        let query = OrderQueryService::default().search_query(&search);
        assert_eq!(
            query.predicates(),
            &[
                Predicate::StatusEq(OrderStatus::Ordered),
                Predicate::MemberNameLike(LikePattern::contains("Bob")),
            ]
        );
    }

    #[test]
    fn pattern_mode_passes_name_through() {
        let service = OrderQueryService::new(NameMatch::Pattern, ResultOrdering::IdAscending);
        let query = service.search_query(&OrderSearch::all().with_member_name("Bo%"));
        assert_eq!(
            query.predicates(),
            &[Predicate::MemberNameLike(LikePattern::raw("Bo%"))]
        );
        assert_eq!(query.ordering(), ResultOrdering::IdAscending);
    }

    #[tokio::test]
    async fn save_delegates_to_context() {
        let order = make_order(1, "Alice");
        let mut session = MockSession::new();
        session
            .expect_persist()
            .withf(|entity: &Order| entity.id() == OrderId::new(1))
            .times(1)
            .returning(|_| Ok(()));

        OrderQueryService::default()
            .save(&session, &order)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn save_propagates_store_error() {
        let mut session = MockSession::new();
        session
            .expect_persist()
            .returning(|_| Err(StoreError::Closed));

        let result = OrderQueryService::default()
            .save(&session, &make_order(1, "Alice"))
            .await;
        assert!(matches!(result, Err(StoreError::Closed)));
    }

    #[tokio::test]
    async fn find_one_returns_none_for_unknown_id() {
        let mut session = MockSession::new();
        session
            .expect_find()
            .with(eq(OrderId::new(99)))
            .returning(|_| Ok(None));

        let found = OrderQueryService::default()
            .find_one(&session, OrderId::new(99))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_all_runs_search_query() {
        let mut session = MockSession::new();
        session
            .expect_fetch()
            .withf(|query: &OrderQuery| {
                query.predicates() == [Predicate::StatusEq(OrderStatus::Canceled)]
                    && query.max_results() == Some(MAX_RESULTS)
            })
            .times(1)
            .returning(|_| Ok(vec![make_order(2, "Bob").with_status(OrderStatus::Canceled)]));

        let orders = OrderQueryService::default()
            .find_all(&session, &OrderSearch::all().with_status(OrderStatus::Canceled))
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id(), OrderId::new(2));
    }

    #[tokio::test]
    async fn find_all_propagates_store_error_unchanged() {
        let mut session = MockSession::new();
        session
            .expect_fetch()
            .times(1)
            .returning(|_| Err(StoreError::Database("disk I/O error".to_string())));

        let result = OrderQueryService::default()
            .find_all(&session, &OrderSearch::all())
            .await;
        match result {
            Err(StoreError::Database(message)) => assert_eq!(message, "disk I/O error"),
            other => panic!("expected database error, got {other:?}"),
        }
    }
}
