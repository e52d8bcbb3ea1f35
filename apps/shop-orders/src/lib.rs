// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Shop Orders - Order persistence and search
//!
//! Stores orders and lists them by optional criteria, composing the
//! present filters into one bounded query.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: `Order`, `Member`, `OrderStatus`, `OrderSearch`
//!
//! - **Application**: Ports, query model, and the service
//!   - `ports`: `PersistenceContext`, `OrderQueryPort`, `StoreError`
//!   - `query`: `Predicate`, `LikePattern`, `OrderQuery`
//!   - `services`: `OrderQueryService`
//!   - `dto`: `OrderDto`
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: `InMemorySession`, `SqliteSession`
//!
//! Configuration and logging setup live in `config` and `telemetry`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_orders::{InMemorySession, OrderQueryService, OrderSearch, OrderStatus};
//!
//! let session = InMemorySession::new();
//! let service = OrderQueryService::default();
//! let search = OrderSearch::all().with_status(OrderStatus::Ordered).with_member_name("Bob");
//! let orders = service.find_all(&session, &search).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business types with no external dependencies.
pub mod domain;

/// Application layer - Ports, query model, and services.
pub mod application;

/// Infrastructure layer - Persistence adapters.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// Domain re-exports
pub use domain::member::Member;
pub use domain::order::{Order, OrderSearch, OrderStatus, ParseOrderStatusError};
pub use domain::shared::{Entity, MemberId, OrderId};

// Application re-exports
pub use application::dto::OrderDto;
pub use application::ports::{OrderQueryPort, PersistenceContext, StoreError};
pub use application::query::{LikePattern, NameMatch, OrderQuery, Predicate, ResultOrdering};
pub use application::services::{MAX_RESULTS, OrderQueryService};

// Infrastructure re-exports
pub use infrastructure::persistence::{InMemorySession, SqliteSession};
