use std::env;

use config as settings;
use serde::Deserialize;
use tracing::warn;

use crate::errors::ConfigError;
use crate::types::{ConfirmationTargets, FeeSchedule};

static DEFAULT_ENV: &str = "development";
static CONFIG_PATH: &str = "config";
static ENV_VAR: &str = "MINING_FEES_ENV";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)] // enforce strict field compliance
pub struct Config {
    // Default fee schedule, used as is whenever no usable external estimate exists.
    pub baseline: FeeSchedule,
    pub confirmation_targets: Option<ConfirmationTargets>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load() -> Result<Config, ConfigError> {
        let env = Config::get_env();
        Config::from_file(&format!("{}/{}.yaml", CONFIG_PATH, env))
    }

    pub fn from_file(config_path: &str) -> Result<Config, ConfigError> {
        let settings = settings::Config::builder()
            .add_source(settings::File::with_name(config_path))
            .build()
            .map_err(ConfigError::ConfigFileError)?;

        let config = settings
            .try_deserialize::<Config>()
            .map_err(ConfigError::ConfigFileError)?;

        config.targets().validate()?;

        Ok(config)
    }

    pub fn targets(&self) -> ConfirmationTargets {
        self.confirmation_targets.unwrap_or_default()
    }

    fn get_env() -> String {
        env::var(ENV_VAR).unwrap_or_else(|_| {
            let default_env = DEFAULT_ENV.to_string();
            warn!(
                "{} not set. Using default environment: {}",
                ENV_VAR, default_env
            );
            default_env
        })
    }
}
