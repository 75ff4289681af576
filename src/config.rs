//! Application configuration via environment variables.

use std::env;
use std::time::Duration;

/// Two weeks, the usual lifetime of a browser session cookie.
const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 14 * 24 * 3600;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_secret: String,
    pub session_https_only: bool,
    pub session_max_age: Duration,
    pub cookie_domain: Option<String>,
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: a non-empty `SESSION_SECRET`. All others have defaults
    /// suitable for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);
        Ok(Self {
            host: vars.get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: vars.parse("PORT", 8000)?,
            session_secret: vars.required("SESSION_SECRET")?,
            session_https_only: vars
                .get("SESSION_HTTPS_ONLY")
                .is_some_and(|v| v == "true" || v == "1" || v == "True"),
            session_max_age: Duration::from_secs(
                vars.parse("SESSION_MAX_AGE_SECS", DEFAULT_SESSION_MAX_AGE_SECS)?,
            ),
            cookie_domain: vars.get("COOKIE_DOMAIN").filter(|d| !d.is_empty()),
            site_name: vars.get("SITE_NAME").unwrap_or_else(|| "Homepage".into()),
        })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fixed configuration for tests; every field can be overridden afterwards.
    pub fn test_default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            session_secret: "test-secret-key".into(),
            session_https_only: false,
            session_max_age: Duration::from_secs(DEFAULT_SESSION_MAX_AGE_SECS),
            cookie_domain: None,
            site_name: "Homepage".into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("invalid value for environment variable {key}: {value:?}")]
    InvalidEnv { key: String, value: String },
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    /// An empty value counts as missing: an empty HMAC key signs anything.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnv(key.into()))
    }

    fn parse<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnv {
                key: key.into(),
                value,
            }),
            None => Ok(default),
        }
    }
}
