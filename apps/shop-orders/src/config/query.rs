//! Order search configuration.

use serde::{Deserialize, Serialize};

use crate::application::query::{NameMatch, ResultOrdering};
use crate::application::services::OrderQueryService;

/// How order searches are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Member name matching mode.
    #[serde(default)]
    pub name_match: NameMatch,
    /// Ordering applied before the result cap.
    #[serde(default)]
    pub ordering: ResultOrdering,
}

impl QueryConfig {
    /// Service configured with these settings.
    #[must_use]
    pub const fn service(&self) -> OrderQueryService {
        OrderQueryService::new(self.name_match, self.ordering)
    }
}
