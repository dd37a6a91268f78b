use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use validator::Validate;

use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "video_catalog.toml";
pub const ENV_PREFIX: &str = "VIDEO_CATALOG_";

/// Layered configuration: defaults, then `video_catalog.toml`, then `VIDEO_CATALOG_*` env vars
pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        }
    }

    /// Extract and validate the configuration
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        // Writing JSON over the source would destroy the catalog.
        if config.input_path == config.output_path {
            return Err(AppError::ConfigError(format!(
                "input_path and output_path both point to '{}'",
                config.input_path
            )));
        }

        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
