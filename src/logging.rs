//! # Structured Logging Module
//!
//! Environment-aware structured logging for hosts embedding the status core.
//! A host that already installed a global subscriber (the Rails bridge usually
//! has) keeps it; initialization here is then a no-op.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::{ConfigManager, LoggingConfig};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific defaults
pub fn init_structured_logging() {
    init_with_config(&LoggingConfig::default());
}

/// Initialize structured logging, honoring an explicit level and output format
pub fn init_with_config(logging: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigManager::detect_environment();
        let log_level = logging
            .level
            .clone()
            .unwrap_or_else(|| get_log_level(&environment).to_string());

        let layer = build_layer(logging, &log_level);

        // Use try_init to avoid panic if global subscriber already set
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            level = %log_level,
            json = logging.json,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Build the formatting layer for the requested output format
fn build_layer(
    logging: &LoggingConfig,
    log_level: &str,
) -> Box<dyn Layer<Registry> + Send + Sync> {
    if logging.json {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .json()
            .with_filter(EnvFilter::new(log_level))
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_ansi(true)
            .with_filter(EnvFilter::new(log_level))
            .boxed()
    }
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "test" => "debug",
        "development" => "debug",
        "production" => "info",
        _ => "debug",
    }
}

/// Log structured data for a status aggregation run
pub fn log_status_operation(
    operation: &str,
    tenant_id: Option<i64>,
    integration_count: usize,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        tenant_id = tenant_id,
        integration_count = integration_count,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "STATUS_OPERATION"
    );
}
