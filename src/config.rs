//! Collector endpoint configuration.
//!
//! The endpoint is resolved once at startup: an explicit `COLLECTOR_ENDPOINT`
//! value wins, otherwise the deployment environment's default endpoint is
//! used. Environment variables are loaded through `dotenvy` so a local
//! `.env` file works during development.

use miette::Diagnostic;
use thiserror::Error;
use url::Url;

/// Errors produced while resolving the collector configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid collector endpoint '{value}'")]
    #[diagnostic(
        code(adcollect::config::invalid_endpoint),
        help("Set COLLECTOR_ENDPOINT to a full http(s) URL.")
    )]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Deployment environment, selecting the default collector endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development against a collector on localhost.
    #[default]
    Development,
    /// The hosted collection service.
    Production,
}

impl Environment {
    /// Environment variable naming the deployment environment.
    pub const ENV_VAR: &'static str = "COLLECTOR_ENV";

    /// Parses an environment name; anything but `production` is development.
    #[must_use]
    pub fn from_var(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// Default collector endpoint for this environment.
    #[must_use]
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Environment::Development => "http://0.0.0.0:8080/facebook-ads/ads",
            Environment::Production => "https://projects.propublica.org/facebook-ads/ads",
        }
    }
}

/// Resolved collector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Endpoint ads are submitted to and fetched from.
    pub endpoint: Url,
    /// Environment the endpoint was resolved for.
    pub environment: Environment,
}

impl CollectorConfig {
    /// Environment variable overriding the endpoint URL.
    pub const ENDPOINT_VAR: &'static str = "COLLECTOR_ENDPOINT";

    /// Resolves configuration from the process environment.
    ///
    /// Loads `.env` if present, reads [`Environment::ENV_VAR`] for the
    /// deployment environment, and lets [`Self::ENDPOINT_VAR`] override the
    /// environment's default endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = std::env::var(Environment::ENV_VAR)
            .map(|value| Environment::from_var(&value))
            .unwrap_or_default();
        let endpoint_override = std::env::var(Self::ENDPOINT_VAR).ok();
        Self::resolve(environment, endpoint_override)
    }

    /// Resolves configuration from explicit values.
    ///
    /// `endpoint_override` wins over the environment default when provided.
    pub fn resolve(
        environment: Environment,
        endpoint_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw = endpoint_override.unwrap_or_else(|| environment.default_endpoint().to_string());
        let endpoint = Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
            value: raw,
            source,
        })?;
        Ok(Self {
            endpoint,
            environment,
        })
    }

    /// Builds a configuration pointing at an explicit endpoint.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, ConfigError> {
        Self::resolve(Environment::default(), Some(endpoint.to_string()))
    }
}
