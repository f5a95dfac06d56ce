//! Application configuration

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AisTaggingError;
use crate::tagging::Tagging;
use crate::transform::Policy;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub transform: TransformConfig,
    /// Tagging packets must match, empty to accept all
    #[serde(default)]
    pub filter: Tagging,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TransformConfig {
    #[serde(default)]
    pub policy: Policy,
    #[serde(default)]
    pub tagging: Tagging,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("AISTAGGING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a single file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }
}

impl TransformConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), AisTaggingError> {
        if self.tagging.is_empty() {
            return Err(AisTaggingError::ConfigurationError {
                message: "Transform tagging cannot be empty".to_string(),
            });
        }
        if self.tagging.timestamp.is_some() && self.policy == Policy::PrependMissing {
            warn!("Timestamp is never added by the prepend_missing policy");
        }
        Ok(())
    }
}
