//! # System Constants
//!
//! Labels and environment names shared with the Rails integrations engine.

/// Connection-state labels written by the integrations engine
pub mod connection_status {
    pub const CONNECTED: &str = "connected";
    pub const DISCONNECTED: &str = "disconnected";
}

/// Environment variables consulted at startup
pub mod env {
    /// Checked in order when detecting the runtime environment
    pub const ENVIRONMENT_VARS: &[&str] = &[
        "INTEGRATION_STATUS_ENV",
        "RAILS_ENV",
        "RACK_ENV",
        "APP_ENV",
    ];

    /// Prefix for configuration overrides, e.g. `INTEGRATION_STATUS__LOGGING__LEVEL`
    pub const CONFIG_PREFIX: &str = "INTEGRATION_STATUS";

    /// Separator between nested configuration keys in override names
    pub const CONFIG_SEPARATOR: &str = "__";

    pub const DEFAULT_ENVIRONMENT: &str = "development";
}

/// System-wide constants
pub mod system {
    /// Log level labels accepted by configuration
    pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
}
