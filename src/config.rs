//! Application configuration management.
//!
//! Configuration is read once from environment variables with `envy` and
//! then shared read-only with every request.

use serde::Deserialize;
use std::path::PathBuf;

/// Operating mode. Controls log verbosity and how much detail a 500
/// response exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    #[serde(other)]
    Development,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `API_TOKEN` (required): shared secret expected in `Authorization: Bearer <token>`
/// - `APP_ENV` (optional): `production`, anything else means development.
///   `NODE_ENV` is read instead when `APP_ENV` is unset
/// - `PORT` (optional): HTTP server port, defaults to 9000 (also when empty)
/// - `CATALOG_PATH` (optional): JSON file replacing the bundled catalog
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_token: String,

    #[serde(default)]
    pub app_env: Environment,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    9000
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("API_TOKEN must not be empty")]
    EmptyToken,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_TOKEN` is missing or empty, or if a value
    /// cannot be parsed (e.g. a non-numeric `PORT`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build a configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(normalize_vars(vars))?;

        if config.api_token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        Ok(config)
    }
}

/// Apply the fallbacks envy cannot express: an empty `PORT` counts as unset
/// and `NODE_ENV` stands in for a missing `APP_ENV`.
fn normalize_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(key, value)| !(key == "PORT" && value.is_empty()))
        .collect();

    if !vars.iter().any(|(key, _)| key == "APP_ENV") {
        let node_env = vars
            .iter()
            .find(|(key, _)| key == "NODE_ENV")
            .map(|(_, value)| value.clone());

        if let Some(mode) = node_env {
            vars.push(("APP_ENV".to_string(), mode));
        }
    }

    vars
}
