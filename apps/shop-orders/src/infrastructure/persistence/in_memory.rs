//! In-memory persistence session.
//!
//! Keeps orders in insertion order so that storage ordering is stable.
//! Mirrors the relational rules of the SQLite adapter: identities are
//! unique and an order may only reference a stored member, exactly as
//! stored.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::ports::{OrderQueryPort, PersistenceContext, StoreError};
use crate::application::query::{OrderQuery, ResultOrdering};
use crate::domain::member::Member;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::shared::{Entity, MemberId, OrderId};

#[derive(Debug, Clone)]
struct OrderRow {
    id: OrderId,
    member_id: MemberId,
    status: OrderStatus,
    order_date: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    members: HashMap<MemberId, Member>,
    orders: Vec<OrderRow>,
    order_index: HashMap<OrderId, usize>,
}

impl Tables {
    /// Inner join of an order row with its member.
    fn join(&self, row: &OrderRow) -> Option<Order> {
        let member = self.members.get(&row.member_id)?;
        Some(Order::new(row.id, member.clone(), row.status, row.order_date))
    }
}

/// Process-local persistence context.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemorySession {
    tables: RwLock<Tables>,
    closed: AtomicBool,
}

impl InMemorySession {
    /// Create a new empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .orders
            .len()
    }

    /// Whether no orders are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close the session. Every later call fails with `StoreError::Closed`.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    /// Whether [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.is_closed() {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl PersistenceContext<Member> for InMemorySession {
    async fn persist(&self, member: &Member) -> Result<(), StoreError> {
        self.ensure_open()?;
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if tables.members.contains_key(&member.id()) {
            return Err(StoreError::Duplicate {
                entity: Member::NAME,
                id: member.id().to_string(),
            });
        }
        tables.members.insert(member.id(), member.clone());
        Ok(())
    }

    async fn find(&self, id: &MemberId) -> Result<Option<Member>, StoreError> {
        self.ensure_open()?;
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.members.get(id).cloned())
    }
}

#[async_trait]
impl PersistenceContext<Order> for InMemorySession {
    async fn persist(&self, order: &Order) -> Result<(), StoreError> {
        self.ensure_open()?;
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if tables.order_index.contains_key(&order.id()) {
            return Err(StoreError::Duplicate {
                entity: Order::NAME,
                id: order.id().to_string(),
            });
        }
        let member_id = order.member().id();
        match tables.members.get(&member_id) {
            None => {
                return Err(StoreError::MissingReference {
                    entity: Member::NAME,
                    id: member_id.to_string(),
                });
            }
            Some(stored) if stored != order.member() => {
                return Err(StoreError::ReferenceMismatch {
                    entity: Member::NAME,
                    id: member_id.to_string(),
                });
            }
            Some(_) => {}
        }

        let position = tables.orders.len();
        tables.orders.push(OrderRow {
            id: order.id(),
            member_id,
            status: order.status(),
            order_date: order.order_date(),
        });
        tables.order_index.insert(order.id(), position);
        Ok(())
    }

    async fn find(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        self.ensure_open()?;
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tables
            .order_index
            .get(id)
            .and_then(|&position| tables.join(&tables.orders[position])))
    }
}

#[async_trait]
impl OrderQueryPort for InMemorySession {
    async fn fetch(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError> {
        self.ensure_open()?;
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let limit = query.max_results().unwrap_or(usize::MAX);

        let matching = tables
            .orders
            .iter()
            .filter_map(|row| tables.join(row))
            .filter(|order| query.matches(order));

        let orders = match query.ordering() {
            ResultOrdering::Storage => matching.take(limit).collect(),
            ResultOrdering::IdAscending => {
                let mut orders: Vec<Order> = matching.collect();
                orders.sort_by_key(Order::id);
                orders.truncate(limit);
                orders
            }
        };
        Ok(orders)
    }
}
