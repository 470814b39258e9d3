//! Alpaca API operations.
//!
//! Every operation is a method on [`AlpacaClient`](crate::AlpacaClient).
//! The submodules group them by resource:
//!
//! - account: the trading account
//! - assets: tradable instruments
//! - orders: placing, querying and cancelling orders
//! - positions: open positions
//! - market data: historical bars
//! - market time: the trading calendar and the market clock

mod account;
mod assets;
mod market_data;
mod market_time;
mod orders;
mod positions;

pub use market_data::BarsQuery;
pub use orders::OrdersQuery;
