//! Order Query Port

use async_trait::async_trait;

use super::StoreError;
use crate::application::query::OrderQuery;
use crate::domain::order::Order;

/// Executes bounded order queries.
#[async_trait]
pub trait OrderQueryPort: Send + Sync {
    /// Run the query and return matching orders, each joined to its member.
    ///
    /// # Errors
    ///
    /// Returns error if the context is closed or the read fails.
    async fn fetch(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError>;
}
