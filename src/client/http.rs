//! HTTP client implementation for the Alpaca API.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::auth::{KEY_ID_HEADER, SECRET_KEY_HEADER};
use crate::error::Lookup;
use crate::{Error, Result};

use super::config::{ClientConfig, Config};

/// The main client for interacting with the Alpaca API.
///
/// Each API operation is a method on the client, grouped by resource in
/// the [`api`](crate::api) module. Every call makes exactly one HTTP round
/// trip and keeps no state between calls. Cloning is cheap and clones can
/// be used from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use alpaca_trade_rs::{AlpacaClient, Config, Environment};
///
/// # async fn example() -> alpaca_trade_rs::Result<()> {
/// let client = AlpacaClient::new(Config::for_environment(
///     Environment::Paper,
///     "your-key-id",
///     "your-secret-key",
/// ))?;
///
/// let account = client.account().await?;
/// println!("Buying power: {}", account.buying_power);
///
/// for position in client.positions().await? {
///     println!("{}: {}", position.symbol, position.qty);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AlpacaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Config,
    pub(crate) client_config: ClientConfig,
}

/// Which configured endpoint a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Host {
    Trading,
    Data,
}

impl AlpacaClient {
    /// Create a client with default transport options.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create a client from `APCA_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Create a client with custom transport options.
    pub fn with_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&client_config.user_agent);
        if let Some(timeout) = client_config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                client_config,
            }),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

impl ClientInner {
    /// Build the absolute URL for a path on one of the endpoints.
    pub(crate) fn url(&self, host: Host, path: &str) -> Result<Url> {
        let base = match host {
            Host::Trading => self.config.endpoint(),
            Host::Data => self.config.data_endpoint(),
        };
        let path = path.strip_prefix('/').unwrap_or(path);
        Ok(Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))?)
    }

    /// Send one request and return the body of a successful response.
    ///
    /// Non-2xx responses are mapped onto an [`Error`] variant. A 204 or an
    /// empty body yields `None`.
    pub(crate) async fn send<Q, B>(
        &self,
        method: Method,
        host: Host,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        lookup: Lookup,
    ) -> Result<Option<String>>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(host, path)?;
        let credentials = self.config.credentials();

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(KEY_ID_HEADER, credentials.key_id())
            .header(SECRET_KEY_HEADER, credentials.key_secret())
            .header(ACCEPT, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let request = request.build()?;
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            let err = Error::from_response(status.as_u16(), text, &lookup);
            tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }

    /// Send a request and decode the response body as `T`.
    pub(crate) async fn request<T, Q, B>(
        &self,
        method: Method,
        host: Host,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        lookup: Lookup,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let text = self
            .send(method, host, path, query, body, lookup)
            .await?
            .unwrap_or_default();
        Ok(serde_json::from_str(&text)?)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, lookup: Lookup) -> Result<T> {
        self.request(Method::GET, Host::Trading, path, None::<&()>, None::<&()>, lookup)
            .await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, host: Host, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, host, path, Some(query), None::<&()>, Lookup::Resource)
            .await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, Host::Trading, path, None::<&()>, Some(body), Lookup::Resource)
            .await
    }

    /// Make a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, path: &str, lookup: Lookup) -> Result<()> {
        self.send(Method::DELETE, Host::Trading, path, None::<&()>, None::<&()>, lookup)
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for AlpacaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlpacaClient")
            .field("config", &self.inner.config)
            .field("client_config", &self.inner.client_config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> AlpacaClient {
        AlpacaClient::new(Config::new(endpoint, "key", "secret")).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client("https://paper-api.alpaca.markets");
        let url = client.inner.url(Host::Trading, "/v2/account").unwrap();
        assert_eq!(url.as_str(), "https://paper-api.alpaca.markets/v2/account");
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let client = client("https://paper-api.alpaca.markets/");
        let url = client.inner.url(Host::Trading, "v2/orders").unwrap();
        assert_eq!(url.as_str(), "https://paper-api.alpaca.markets/v2/orders");
    }

    #[test]
    fn test_data_host_falls_back_to_trading_endpoint() {
        let client = client("https://paper-api.alpaca.markets");
        let url = client.inner.url(Host::Data, "/v1/bars/1D").unwrap();
        assert_eq!(url.as_str(), "https://paper-api.alpaca.markets/v1/bars/1D");

        let client = AlpacaClient::new(
            Config::new("https://paper-api.alpaca.markets", "key", "secret")
                .with_data_endpoint("https://data.alpaca.markets"),
        )
        .unwrap();
        let url = client.inner.url(Host::Data, "/v1/bars/1D").unwrap();
        assert_eq!(url.as_str(), "https://data.alpaca.markets/v1/bars/1D");
    }

    #[test]
    fn test_invalid_endpoint_is_url_error() {
        let client = client("not a url");
        assert!(matches!(
            client.inner.url(Host::Trading, "/v2/account"),
            Err(Error::UrlParse(_))
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", client("https://paper-api.alpaca.markets"));
        assert!(!debug.contains("secret\""));
        assert!(debug.contains("[REDACTED]"));
    }
}
