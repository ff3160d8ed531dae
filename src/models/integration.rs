use serde::{Deserialize, Serialize};

use crate::constants::connection_status;

/// Integration represents a tenant's configured connection to an external system.
///
/// Integrations are provisioned and persisted by the Rails side; this crate only
/// receives already tenant-scoped snapshots of them. `status` is the raw
/// connection-state label and is copied through to the computed status untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Integration {
    pub id: i64,
    pub tenant_id: i64,
    pub external_system: String,
    pub status: String,
}

impl Integration {
    pub fn new(
        id: i64,
        tenant_id: i64,
        external_system: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            external_system: external_system.into(),
            status: status.into(),
        }
    }

    /// Check whether the connection-state label reads as connected
    pub fn is_connected(&self) -> bool {
        self.status == connection_status::CONNECTED
    }
}
