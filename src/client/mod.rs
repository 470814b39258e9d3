//! HTTP client and configuration for the Alpaca API.
//!
//! This module provides the main entry point [`AlpacaClient`] and the
//! [`Config`] it is built from.
//!
//! # Example
//!
//! ```no_run
//! use alpaca_trade_rs::{AlpacaClient, Config, ConfigOverrides};
//!
//! # async fn example() -> alpaca_trade_rs::Result<()> {
//! // Environment first, then anything passed explicitly wins
//! let config = Config::from_env()?.resolve(ConfigOverrides {
//!     endpoint: Some("https://paper-api.alpaca.markets".to_string()),
//!     ..Default::default()
//! });
//! let client = AlpacaClient::new(config)?;
//!
//! let clock = client.clock().await?;
//! println!("Market open: {}", clock.is_open);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{
    ClientConfig, Config, ConfigOverrides, ENV_API_BASE_URL, ENV_DATA_URL, ENV_KEY_ID,
    ENV_SECRET_KEY,
};
pub use http::AlpacaClient;
pub(crate) use http::Host;
