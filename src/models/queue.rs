use serde::{Deserialize, Serialize};

/// Queue represents a unit of work ownership belonging to one integration.
///
/// `integration_id` is expected to reference an integration in the same snapshot,
/// but nothing enforces that. Status aggregation treats an unresolved owner as
/// no owner at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Queue {
    pub id: i64,
    pub integration_id: i64,
}

impl Queue {
    pub fn new(id: i64, integration_id: i64) -> Self {
        Self { id, integration_id }
    }

    /// Check whether this queue is owned by the given integration
    pub fn is_owned_by(&self, integration_id: i64) -> bool {
        self.integration_id == integration_id
    }
}
