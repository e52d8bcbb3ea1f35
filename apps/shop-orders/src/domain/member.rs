//! Member entity.
//!
//! Members own orders. This crate only reads them through the order join
//! and stores them so that orders have something to reference.

use serde::{Deserialize, Serialize};

use super::shared::{Entity, MemberId};

/// A registered shop member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
}

impl Member {
    /// Create a member.
    #[must_use]
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Member ID.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Member {
    type Id = MemberId;

    const NAME: &'static str = "member";

    fn entity_id(&self) -> &MemberId {
        &self.id
    }
}
