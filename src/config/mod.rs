//! # Integration Status Configuration
//!
//! Configuration mirrors the Rails side's YAML layout: a base file, an optional
//! environment-specific override file, then `INTEGRATION_STATUS__*` environment
//! variables on top.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use integration_status::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let policy = manager.config().association_policy;
//! # Ok(())
//! # }
//! ```
//!
//! ```yaml
//! # config/integration_status.yaml
//! association_policy: shared_intersection
//! logging:
//!   level: info
//!   json: false
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::constants::system::LOG_LEVELS;
use crate::error::{Result, StatusError};
use crate::status::AssociationPolicy;

pub use loader::ConfigManager;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Rule deciding which integrations a workload counts toward
    pub association_policy: AssociationPolicy,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Overrides the per-environment default level when set
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl StatusConfig {
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        match self.level.as_deref() {
            Some(level) if !LOG_LEVELS.contains(&level) => Err(StatusError::configuration(
                format!("Invalid log level '{level}', expected one of {LOG_LEVELS:?}"),
            )),
            _ => Ok(()),
        }
    }
}
