//! Configuration loading for roster.
//!
//! Values come from environment variables with the `GITLAB_` prefix:
//!
//! - `GITLAB_TOKEN` - personal access token, sent as `PRIVATE-TOKEN`
//! - `GITLAB_URL` - instance base URL, e.g. `https://gitlab.example.com`
//!
//! Both are required. Nothing is read from files: a `.env` or config file in
//! the working directory has no effect.

use config::{Config as ConfigBuilder, Environment};
use roster::Credentials;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the access token.
pub const TOKEN_VAR: &str = "GITLAB_TOKEN";

/// Environment variable holding the instance base URL.
pub const URL_VAR: &str = "GITLAB_URL";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitLab personal access token.
    pub token: Option<String>,
    /// GitLab base URL (scheme + host + optional port).
    pub url: Option<String>,
}

impl Config {
    /// Load configuration from `GITLAB_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("GITLAB")
    }

    fn load_from(source: Environment) -> Result<Self, ConfigError> {
        let settings = ConfigBuilder::builder().add_source(source).build()?;
        let config = settings.try_deserialize::<Config>()?;
        tracing::debug!(
            token_set = config.token.is_some(),
            url_set = config.url.is_some(),
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Resolve the connection settings, rejecting unset or empty values.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let token = non_empty(&self.token).ok_or(ConfigError::Missing(TOKEN_VAR))?;
        let url = non_empty(&self.url).ok_or(ConfigError::Missing(URL_VAR))?;
        Ok(Credentials::new(url, token))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
