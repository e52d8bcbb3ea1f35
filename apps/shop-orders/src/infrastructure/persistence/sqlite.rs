//! SQLite persistence session.
//!
//! Uses `sqlx` with bound parameters only; filter values never reach the
//! SQL text. The session wraps a pool, so one value can serve a whole
//! request and be dropped afterwards.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::{debug, info};

use crate::application::ports::{OrderQueryPort, PersistenceContext, StoreError};
use crate::application::query::{OrderQuery, Predicate, ResultOrdering};
use crate::config::DatabaseConfig;
use crate::domain::member::Member;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::shared::{Entity, MemberId, OrderId};

/// Table definitions, applied in order by [`SqliteSession::migrate`].
const SCHEMA: [&str; 3] = [
    r"CREATE TABLE IF NOT EXISTS members (
        id   INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )",
    r"CREATE TABLE IF NOT EXISTS orders (
        id         INTEGER PRIMARY KEY,
        member_id  INTEGER NOT NULL REFERENCES members (id),
        status     TEXT NOT NULL,
        order_date TEXT NOT NULL
    )",
    r"CREATE INDEX IF NOT EXISTS idx_orders_member_id ON orders (member_id)",
];

/// Orders inner-joined to their members.
const ORDER_SELECT: &str = r"SELECT o.id AS order_id, o.status, o.order_date,
       m.id AS member_id, m.name AS member_name
  FROM orders o
 INNER JOIN members m ON m.id = o.member_id";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed => Self::Closed,
            other => Self::Database(other.to_string()),
        }
    }
}

/// Persistence context backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteSession {
    pool: SqlitePool,
}

impl SqliteSession {
    /// Open a pool for `config.url`, creating the database file if needed.
    ///
    /// In-memory databases are private to one connection, so they get a
    /// single connection that is never recycled.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));
        let pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(url = %config.url, "SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `members` and `orders` tables if they do not exist.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Order schema ready");
        Ok(())
    }

    /// Close the pool. Later calls fail with `StoreError::Closed`.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Check database health.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Render `query` as a parameterized select.
fn build_select(query: &OrderQuery) -> QueryBuilder<'_, Sqlite> {
    let mut builder = QueryBuilder::new(ORDER_SELECT);

    for (position, predicate) in query.predicates().iter().enumerate() {
        builder.push(if position == 0 { " WHERE " } else { " AND " });
        match predicate {
            Predicate::StatusEq(status) => {
                builder.push("o.status = ").push_bind(status.as_str());
            }
            Predicate::MemberNameLike(pattern) => {
                builder
                    .push("m.name LIKE ")
                    .push_bind(pattern.as_str())
                    .push(" ESCAPE '\\'");
            }
        }
    }

    if query.ordering() == ResultOrdering::IdAscending {
        builder.push(" ORDER BY o.id");
    }

    if let Some(limit) = query.max_results() {
        builder
            .push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    builder
}

fn order_from_row(row: &SqliteRow) -> Result<Order, StoreError> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<OrderStatus>()
        .map_err(|e| StoreError::Corrupt(e.to_string()))?;
    let member = Member::new(
        MemberId::new(row.try_get("member_id")?),
        row.try_get::<String, _>("member_name")?,
    );

    Ok(Order::new(
        OrderId::new(row.try_get("order_id")?),
        member,
        status,
        row.try_get("order_date")?,
    ))
}

/// Map constraint violations on insert to the matching `StoreError`.
fn insert_error(
    err: sqlx::Error,
    entity: &'static str,
    id: String,
    reference: Option<(&'static str, String)>,
) -> StoreError {
    let Some(db_err) = err.as_database_error() else {
        return err.into();
    };
    if db_err.is_unique_violation() {
        return StoreError::Duplicate { entity, id };
    }
    match reference {
        Some((entity, id)) if db_err.is_foreign_key_violation() => {
            StoreError::MissingReference { entity, id }
        }
        _ => err.into(),
    }
}

#[async_trait]
impl PersistenceContext<Member> for SqliteSession {
    async fn persist(&self, member: &Member) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO members (id, name) VALUES (?, ?)")
            .bind(member.id().value())
            .bind(member.name())
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(e, Member::NAME, member.id().to_string(), None))?;
        debug!(member_id = %member.id(), "Member persisted");
        Ok(())
    }

    async fn find(&self, id: &MemberId) -> Result<Option<Member>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM members WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> Result<Member, StoreError> {
            Ok(Member::new(
                MemberId::new(r.try_get("id")?),
                r.try_get::<String, _>("name")?,
            ))
        })
        .transpose()
    }
}

#[async_trait]
impl PersistenceContext<Order> for SqliteSession {
    async fn persist(&self, order: &Order) -> Result<(), StoreError> {
        let member_id = order.member().id();
        let mut tx = self.pool.begin().await?;

        let stored_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM members WHERE id = ?")
                .bind(member_id.value())
                .fetch_optional(&mut *tx)
                .await?;
        match stored_name {
            None => {
                return Err(StoreError::MissingReference {
                    entity: Member::NAME,
                    id: member_id.to_string(),
                });
            }
            Some(name) if name != order.member().name() => {
                return Err(StoreError::ReferenceMismatch {
                    entity: Member::NAME,
                    id: member_id.to_string(),
                });
            }
            Some(_) => {}
        }

        sqlx::query("INSERT INTO orders (id, member_id, status, order_date) VALUES (?, ?, ?, ?)")
            .bind(order.id().value())
            .bind(member_id.value())
            .bind(order.status().as_str())
            .bind(order.order_date())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                insert_error(
                    e,
                    Order::NAME,
                    order.id().to_string(),
                    Some((Member::NAME, member_id.to_string())),
                )
            })?;
        tx.commit().await?;
        debug!(order_id = %order.id(), "Order persisted");
        Ok(())
    }

    async fn find(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        let sql = format!("{ORDER_SELECT} WHERE o.id = ?");
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(order_from_row).transpose()
    }
}

#[async_trait]
impl OrderQueryPort for SqliteSession {
    async fn fetch(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError> {
        let mut builder = build_select(query);
        let rows = builder.build().fetch_all(&self.pool).await?;
        debug!(rows = rows.len(), "Order query executed");
        rows.iter().map(order_from_row).collect()
    }
}
