//! Entity abstraction used by persistence ports.

use std::fmt::Debug;
use std::hash::Hash;

/// A record with a stable identity that a persistence context can track.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type.
    type Id: Clone + Eq + Hash + Debug + Send + Sync;

    /// Entity name used in log fields and error messages.
    const NAME: &'static str;

    /// Identity of this entity.
    fn entity_id(&self) -> &Self::Id;
}
