// src/config.rs

use std::env;

const DEFAULT_TABLE: &str = "twitter_account_history";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Service configuration, resolved once from the environment at
/// startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub classifier_base_url: String,
    pub warehouse_base_url: String,
    pub warehouse_table: String,
    pub warehouse_api_token: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let classifier_base_url =
            env::var("CLASSIFIER_BASE_URL").map_err(|_| ConfigError::Missing("CLASSIFIER_BASE_URL"))?;

        let warehouse_base_url =
            env::var("WAREHOUSE_BASE_URL").map_err(|_| ConfigError::Missing("WAREHOUSE_BASE_URL"))?;

        let warehouse_table =
            env::var("WAREHOUSE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());

        let warehouse_api_token = env::var("WAREHOUSE_API_TOKEN").ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            classifier_base_url,
            warehouse_base_url,
            warehouse_table,
            warehouse_api_token,
            port,
        })
    }
}
