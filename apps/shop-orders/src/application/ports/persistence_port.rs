//! Persistence Context Port
//!
//! Session abstraction that stores entities and loads them back by identity.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::shared::Entity;

/// Errors raised by a persistence context or query executor.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The session was closed before the call.
    #[error("Persistence context is closed")]
    Closed,

    /// An entity with the same identity is already stored.
    #[error("Duplicate {entity}: {id}")]
    Duplicate {
        /// Entity name.
        entity: &'static str,
        /// Identity that collided.
        id: String,
    },

    /// The entity refers to another entity that is not stored.
    #[error("Missing referenced {entity}: {id}")]
    MissingReference {
        /// Referenced entity name.
        entity: &'static str,
        /// Referenced identity.
        id: String,
    },

    /// The entity embeds a referenced entity that differs from the stored one.
    #[error("Referenced {entity} {id} differs from the stored {entity}")]
    ReferenceMismatch {
        /// Referenced entity name.
        entity: &'static str,
        /// Referenced identity.
        id: String,
    },

    /// Stored data could not be turned back into domain values.
    #[error("Corrupt stored data: {0}")]
    Corrupt(String),

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(String),
}

/// Persistence context for one entity type.
///
/// Implementations are supplied per call by the caller; services never hold
/// on to one.
#[async_trait]
pub trait PersistenceContext<E: Entity>: Send + Sync {
    /// Register a new entity with the store.
    ///
    /// # Errors
    ///
    /// Returns error if the context is closed, the identity is already
    /// taken, a referenced entity is missing or differs from the stored
    /// one, or the store rejects the write.
    async fn persist(&self, entity: &E) -> Result<(), StoreError>;

    /// Load an entity by identity. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns error if the context is closed or the read fails.
    async fn find(&self, id: &E::Id) -> Result<Option<E>, StoreError>;
}
