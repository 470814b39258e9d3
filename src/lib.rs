//! # alpaca-trade-rs
//!
//! A Rust client for the Alpaca brokerage REST API.
//!
//! The crate covers the account, assets, orders, positions, historical
//! bars, the trading calendar and the market clock. Every operation is a
//! single HTTP round trip that returns a typed model or a typed [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alpaca_trade_rs::AlpacaClient;
//!
//! #[tokio::main]
//! async fn main() -> alpaca_trade_rs::Result<()> {
//!     // Reads APCA_API_BASE_URL, APCA_API_KEY_ID and APCA_API_SECRET_KEY
//!     let client = AlpacaClient::from_env()?;
//!
//!     let account = client.account().await?;
//!     println!("Buying power: {} {}", account.buying_power, account.currency);
//!
//!     let clock = client.clock().await?;
//!     println!("Market open: {}", clock.is_open);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Order Placement
//!
//! ```rust,no_run
//! use alpaca_trade_rs::{AlpacaClient, Config, Environment, Error};
//! use alpaca_trade_rs::models::{NewOrder, OrderSide};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> alpaca_trade_rs::Result<()> {
//!     let client = AlpacaClient::new(Config::for_environment(
//!         Environment::Paper,
//!         "your-key-id",
//!         "your-secret-key",
//!     ))?;
//!
//!     let order = NewOrder::market("AAPL", dec!(10), OrderSide::Buy)
//!         .client_order_id("my-first-order");
//!
//!     match client.new_order(&order).await {
//!         Ok(order) => println!("Order placed: {}", order.id),
//!         Err(Error::InsufficientFunds(response)) => {
//!             println!("Not enough buying power: {}", response.message)
//!         }
//!         Err(err) => return Err(err),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{AlpacaClient, ClientConfig, Config, ConfigOverrides};
pub use error::{Error, ErrorResponse, Result};
pub use models::{Environment, OrderId, Symbol};

/// Prelude module for convenient imports.
///
/// ```rust
/// use alpaca_trade_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{BarsQuery, OrdersQuery};
    pub use crate::auth::Credentials;
    pub use crate::client::{AlpacaClient, ClientConfig, Config, ConfigOverrides};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::models::{
        // Primitives
        Environment, OrderId, Symbol,
        // Enums
        AccountStatus, AssetClass, AssetStatus, OrderQueryStatus, OrderSide, OrderStatus,
        OrderType, PositionSide, SortDirection, TimeInForce, Timeframe,
        // Resources
        Account, Asset, Bar, BarSet, Calendar, Clock, NewOrder, Order, Position,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_creation() {
        let symbol = Symbol::new("AAPL");
        assert_eq!(symbol.as_str(), "AAPL");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Live.api_base_url(),
            "https://api.alpaca.markets"
        );
        assert_eq!(
            Environment::Paper.api_base_url(),
            "https://paper-api.alpaca.markets"
        );
    }

    #[test]
    fn test_for_environment_uses_environment_endpoint() {
        let config = Config::for_environment(Environment::Live, "key", "secret");
        assert_eq!(config.endpoint(), "https://api.alpaca.markets");
        assert_eq!(config.credentials().key_id(), "key");
    }
}
