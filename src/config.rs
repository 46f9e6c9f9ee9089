//! Runtime configuration resolved from environment variables.

use std::{path::PathBuf, time::Duration};

use reqwest::Url;

use crate::error::config::ConfigError;

pub const API_BASE_URL_VAR: &str = "APPETITE_API_BASE_URL";
pub const ENVIRONMENT_VAR: &str = "APPETITE_ENV";
pub const REQUEST_TIMEOUT_VAR: &str = "APPETITE_REQUEST_TIMEOUT_SECS";
pub const CSRF_VAR: &str = "APPETITE_CSRF";
pub const SESSION_PATH_VAR: &str = "APPETITE_SESSION_PATH";

pub const DEVELOPMENT_API_BASE_URL: &str = "http://localhost:5131";
pub const PRODUCTION_API_BASE_URL: &str = "https://your-backend-url.com";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_SESSION_PATH: &str = ".appetite-session.json";

/// Deployment mode used to pick the default backend URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvValue {
                var: ENVIRONMENT_VAR.to_string(),
                reason: format!("expected `development` or `production`, got `{}`", other),
            }),
        }
    }

    /// Backend URL used when no explicit override is configured.
    pub fn default_api_base_url(&self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT_API_BASE_URL,
            Self::Production => PRODUCTION_API_BASE_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin without the `/api` prefix, endpoint paths carry it.
    pub api_base_url: Url,
    pub environment: Environment,
    /// Upper bound for a whole request/response exchange before it is aborted.
    pub request_timeout: Duration,
    /// Attach the `X-XSRF-TOKEN` anti-forgery header to mutating requests.
    pub csrf_enabled: bool,
    /// File used to persist the session between runs of the binary.
    pub session_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Base URL selection order is explicit override, then the environment-mode default.
    /// Blank values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Resolved configuration
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable was set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let environment = get(ENVIRONMENT_VAR)
            .map(|value| Environment::parse(&value))
            .transpose()?
            .unwrap_or_default();

        let api_base_url = match get(API_BASE_URL_VAR) {
            Some(url) => parse_base_url(API_BASE_URL_VAR, &url)?,
            None => parse_base_url(ENVIRONMENT_VAR, environment.default_api_base_url())?,
        };

        let request_timeout = match get(REQUEST_TIMEOUT_VAR) {
            Some(secs) => {
                let secs = secs
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidEnvValue {
                        var: REQUEST_TIMEOUT_VAR.to_string(),
                        reason: format!("expected a positive number of seconds, got `{}`", secs),
                    })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let csrf_enabled = match get(CSRF_VAR) {
            Some(flag) => match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: CSRF_VAR.to_string(),
                        reason: format!("expected `true` or `false`, got `{}`", other),
                    })
                }
            },
            None => false,
        };

        let session_path = get(SESSION_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_PATH));

        Ok(Self {
            api_base_url,
            environment,
            request_timeout,
            csrf_enabled,
            session_path,
        })
    }

    /// Configuration pointing at `url` with every other setting at its default.
    pub fn for_base_url(url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(API_BASE_URL_VAR, url)?,
            environment: Environment::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            csrf_enabled: false,
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_csrf(mut self, enabled: bool) -> Self {
        self.csrf_enabled = enabled;
        self
    }
}

fn parse_base_url(var: &str, url: &str) -> Result<Url, ConfigError> {
    Url::parse(url.trim().trim_end_matches('/')).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })
}
