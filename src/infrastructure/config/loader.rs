use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration directory.
pub const CONFIG_DIR: &str = ".issue-relay";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ISSUE_RELAY_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Repository owner cannot be empty")]
    EmptyOwner,

    #[error("Repository name cannot be empty")]
    EmptyRepo,

    #[error("Invalid page_size: {0}. Must be between 1 and 100")]
    InvalidPageSize(u8),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .issue-relay/config.yaml (project config)
    /// 3. .issue-relay/local.yaml (project local overrides, optional)
    /// 4. Environment variables (ISSUE_RELAY_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(format!("{CONFIG_DIR}/config.yaml")))
            .merge(Yaml::file(format!("{CONFIG_DIR}/local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring
    /// environment overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.repository.owner.trim().is_empty() {
            return Err(ConfigError::EmptyOwner);
        }
        if config.repository.repo.trim().is_empty() {
            return Err(ConfigError::EmptyRepo);
        }

        if config.github.api_base_url.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "github.api_base_url cannot be empty".to_string(),
            ));
        }

        if config.dispatch.workflow.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "dispatch.workflow cannot be empty".to_string(),
            ));
        }
        if config.dispatch.git_ref.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "dispatch.git_ref cannot be empty".to_string(),
            ));
        }
        if config.dispatch.event_type.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "dispatch.event_type cannot be empty".to_string(),
            ));
        }

        // GitHub caps per_page at 100
        if !(1..=100).contains(&config.iteration.page_size) {
            return Err(ConfigError::InvalidPageSize(config.iteration.page_size));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}
