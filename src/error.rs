//! # Error Types
//!
//! Structured error handling for the integration status core using thiserror.
//!
//! The status aggregation itself is total and never returns an error. Errors only
//! arise at the edges: parsing labels that arrive as strings from the Rails side,
//! and loading configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatusError {
    #[error("Invalid workload mode: {mode}")]
    InvalidWorkloadMode { mode: String },

    #[error("Invalid association policy: {policy}")]
    InvalidAssociationPolicy { policy: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StatusError {
    pub fn invalid_workload_mode<S: Into<String>>(mode: S) -> Self {
        Self::InvalidWorkloadMode { mode: mode.into() }
    }

    pub fn invalid_association_policy<S: Into<String>>(policy: S) -> Self {
        Self::InvalidAssociationPolicy {
            policy: policy.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<config::ConfigError> for StatusError {
    fn from(error: config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
