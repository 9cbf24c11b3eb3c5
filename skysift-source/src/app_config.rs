use serde::Deserialize;
use std::env;

use skysift_core::criteria::SortKey;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub autocomplete: AutocompleteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Sort applied before the user picks one.
    #[serde(default)]
    pub default_sort: SortKey,
    /// Bounds of the price filter control.
    pub price_floor: f64,
    pub price_ceiling: f64,
    pub price_step: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AutocompleteConfig {
    pub max_results: usize,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SKYSIFT)
            // Eg.. `SKYSIFT_DEBUG=1` would set the `debug` key
            .add_source(config::Environment::with_prefix("SKYSIFT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
