//! Client configuration.
//!
//! [`Config`] says where to send requests and with which credentials;
//! [`ClientConfig`] tunes the HTTP transport. Both are plain values handed
//! to [`AlpacaClient`](crate::AlpacaClient) at construction time and never
//! change afterwards.

use std::env;
use std::time::Duration;

use crate::auth::Credentials;
use crate::{Environment, Error, Result};

/// Environment variable holding the trading endpoint.
pub const ENV_API_BASE_URL: &str = "APCA_API_BASE_URL";
/// Environment variable holding the market data endpoint.
pub const ENV_DATA_URL: &str = "APCA_API_DATA_URL";
/// Environment variable holding the key id.
pub const ENV_KEY_ID: &str = "APCA_API_KEY_ID";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "APCA_API_SECRET_KEY";

/// Endpoint and credentials for one client.
///
/// # Example
///
/// ```
/// use alpaca_trade_rs::{Config, ConfigOverrides};
///
/// let defaults = Config::new("https://paper-api.alpaca.markets", "key", "secret");
/// let config = defaults.resolve(ConfigOverrides {
///     endpoint: Some("https://api.alpaca.markets".into()),
///     ..Default::default()
/// });
/// assert_eq!(config.endpoint(), "https://api.alpaca.markets");
/// assert_eq!(config.credentials().key_id(), "key");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
    data_endpoint: Option<String>,
    credentials: Credentials,
}

/// Values that replace fields of a default [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Trading endpoint
    pub endpoint: Option<String>,
    /// Market data endpoint
    pub data_endpoint: Option<String>,
    /// Key id
    pub key_id: Option<String>,
    /// Secret key
    pub key_secret: Option<String>,
}

impl Config {
    /// Create a configuration. The endpoint is not validated here; a bad
    /// endpoint fails when the first request is made.
    pub fn new(
        endpoint: impl Into<String>,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            data_endpoint: None,
            credentials: Credentials::new(key_id, key_secret),
        }
    }

    /// Create a configuration for one of the well-known environments.
    pub fn for_environment(
        environment: Environment,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Self {
        Self::new(environment.api_base_url(), key_id, key_secret)
    }

    /// Read the configuration from `APCA_API_*` environment variables.
    ///
    /// The endpoint defaults to paper trading; the key id and secret are
    /// required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{name} is not set")))
        };

        let key_id = required(ENV_KEY_ID)?;
        let key_secret = required(ENV_SECRET_KEY)?;
        let endpoint = lookup(ENV_API_BASE_URL)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| Environment::Paper.api_base_url().to_string());

        let mut config = Self::new(endpoint, key_id, key_secret);
        config.data_endpoint = lookup(ENV_DATA_URL).filter(|v| !v.is_empty());
        Ok(config)
    }

    /// Set a separate endpoint for market data requests.
    pub fn with_data_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.data_endpoint = Some(endpoint.into());
        self
    }

    /// Apply overrides; fields left unset keep this configuration's values.
    pub fn resolve(&self, overrides: ConfigOverrides) -> Config {
        let key_id = overrides
            .key_id
            .unwrap_or_else(|| self.credentials.key_id().to_string());
        let key_secret = overrides
            .key_secret
            .unwrap_or_else(|| self.credentials.key_secret().to_string());

        Config {
            endpoint: overrides.endpoint.unwrap_or_else(|| self.endpoint.clone()),
            data_endpoint: overrides.data_endpoint.or_else(|| self.data_endpoint.clone()),
            credentials: Credentials::new(key_id, key_secret),
        }
    }

    /// The trading endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The market data endpoint, falling back to the trading endpoint.
    pub fn data_endpoint(&self) -> &str {
        self.data_endpoint.as_deref().unwrap_or(&self.endpoint)
    }

    /// The credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// HTTP transport options.
///
/// # Example
///
/// ```
/// use alpaca_trade_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("alpaca-trade-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("alpaca-trade-rs/"));
    }

    #[test]
    fn test_resolve_without_overrides_keeps_defaults() {
        let defaults = Config::new("https://paper-api.alpaca.markets", "key", "secret");
        let config = defaults.resolve(ConfigOverrides::default());
        assert_eq!(config.endpoint(), "https://paper-api.alpaca.markets");
        assert_eq!(config.data_endpoint(), "https://paper-api.alpaca.markets");
        assert_eq!(config.credentials().key_id(), "key");
        assert_eq!(config.credentials().key_secret(), "secret");
    }

    #[test]
    fn test_resolve_overrides_any_subset() {
        let defaults = Config::new("https://paper-api.alpaca.markets", "key", "secret");
        let config = defaults.resolve(ConfigOverrides {
            key_secret: Some("other-secret".into()),
            data_endpoint: Some("https://data.alpaca.markets".into()),
            ..Default::default()
        });
        assert_eq!(config.endpoint(), "https://paper-api.alpaca.markets");
        assert_eq!(config.data_endpoint(), "https://data.alpaca.markets");
        assert_eq!(config.credentials().key_id(), "key");
        assert_eq!(config.credentials().key_secret(), "other-secret");
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_KEY_ID, "env-key"),
            (ENV_SECRET_KEY, "env-secret"),
            (ENV_API_BASE_URL, "https://api.alpaca.markets"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.endpoint(), "https://api.alpaca.markets");
        assert_eq!(config.data_endpoint(), "https://api.alpaca.markets");
        assert_eq!(config.credentials().key_id(), "env-key");
    }

    #[test]
    fn test_from_lookup_defaults_to_paper() {
        let config = Config::from_lookup(|name| match name {
            ENV_KEY_ID => Some("k".into()),
            ENV_SECRET_KEY => Some("s".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.endpoint(), Environment::Paper.api_base_url());
    }

    #[test]
    fn test_from_lookup_requires_credentials() {
        let err = Config::from_lookup(|name| match name {
            ENV_KEY_ID => Some("k".into()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains(ENV_SECRET_KEY)));
    }
}
