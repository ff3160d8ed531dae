use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StatusError;

/// Workload execution modes matching the Rails workload `mode` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadMode {
    /// Dry run against sample data
    Test,
    /// Syncs history but does not act on it
    Basic,
    /// Active production sync
    Live,
}

impl WorkloadMode {
    /// Check if this mode counts as a live workload on the dashboard
    pub fn is_live(&self) -> bool {
        match self {
            Self::Live => true,
            Self::Test | Self::Basic => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Basic => "basic",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for WorkloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkloadMode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "basic" => Ok(Self::Basic),
            "live" => Ok(Self::Live),
            _ => Err(StatusError::invalid_workload_mode(s)),
        }
    }
}

/// Workload represents a configured sync job reading from zero or more queues.
///
/// `history_source_queue_ids` keeps the order it was configured in, but membership
/// is what matters for association: a queue listed twice is still one queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub id: i64,
    pub history_source_queue_ids: Vec<i64>,
    pub mode: WorkloadMode,
}

impl Workload {
    pub fn new(id: i64, history_source_queue_ids: Vec<i64>, mode: WorkloadMode) -> Self {
        Self {
            id,
            history_source_queue_ids,
            mode,
        }
    }

    pub fn is_live(&self) -> bool {
        self.mode.is_live()
    }

    /// Check whether this workload reads from the given queue
    pub fn reads_from(&self, queue_id: i64) -> bool {
        self.history_source_queue_ids.contains(&queue_id)
    }
}
