//! Configuration Loader
//!
//! Environment-aware configuration loading. Handles YAML file discovery,
//! environment detection, and layering environment variable overrides.

use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::StatusConfig;
use crate::constants::env;
use crate::error::Result;

const CONFIG_FILE_STEM: &str = "integration_status";

/// Loaded configuration together with the environment it was resolved for
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: StatusConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> Result<Self> {
        Self::load_from_directory(Self::default_config_directory())
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: impl AsRef<Path>) -> Result<Self> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment.
    ///
    /// Useful for testing without modifying global environment variables.
    pub fn load_from_directory_with_env(
        config_dir: impl AsRef<Path>,
        environment: &str,
    ) -> Result<Self> {
        let config_directory = config_dir.as_ref().to_path_buf();

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let base_file = config_directory.join(format!("{CONFIG_FILE_STEM}.yaml"));
        let environment_file =
            config_directory.join(format!("{CONFIG_FILE_STEM}.{environment}.yaml"));

        let settings = Config::builder()
            .add_source(File::from(base_file).format(FileFormat::Yaml).required(false))
            .add_source(
                File::from(environment_file)
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::CONFIG_PREFIX).separator(env::CONFIG_SEPARATOR),
            )
            .build()?;

        let config: StatusConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(
            environment = %environment,
            config = %serde_json::to_string(&config)
                .unwrap_or_else(|_| "[serialization error]".to_string()),
            "Configuration loaded successfully"
        );

        Ok(Self {
            config,
            environment: environment.to_string(),
            config_directory,
        })
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// Detect the current environment from the process environment
    pub fn detect_environment() -> String {
        Self::environment_from(|name| std::env::var(name).ok())
    }

    pub(crate) fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
        env::ENVIRONMENT_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
            .unwrap_or_else(|| env::DEFAULT_ENVIRONMENT.to_string())
    }

    fn default_config_directory() -> PathBuf {
        PathBuf::from("config")
    }
}
