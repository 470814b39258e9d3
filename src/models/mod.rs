//! Data models for the Alpaca API.
//!
//! Every resource is an immutable record decoded from one JSON payload.
//! Decoding is all-or-nothing: a missing required field, a non-numeric
//! price or a non-boolean flag fails the whole record.
//!
//! - [`primitives`] - `OrderId`, `Symbol`, `Environment`
//! - [`enums`] - statuses, sides, order types, timeframes
//! - [`account`], [`asset`], [`order`], [`position`] - trading resources
//! - [`bar`] - historical bars and the per-symbol [`BarSet`]
//! - [`market_time`] - market calendar and clock

pub mod primitives;
pub mod enums;
pub mod account;
pub mod asset;
pub mod bar;
pub mod market_time;
pub mod order;
pub mod position;

mod de;

pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use asset::*;
pub use bar::*;
pub use market_time::*;
pub use order::*;
pub use position::*;

use serde::de::DeserializeOwned;

/// Decode one resource (or a list of them) from a JSON value.
///
/// ```
/// use alpaca_trade_rs::models::{decode, Clock};
///
/// let clock: Clock = decode(serde_json::json!({
///     "timestamp": "2018-04-01T12:00:00Z",
///     "is_open": true,
///     "next_open": "2018-04-02T13:30:00Z",
///     "next_close": "2018-04-01T20:00:00Z"
/// }))?;
/// assert!(clock.is_open);
/// # Ok::<(), alpaca_trade_rs::Error>(())
/// ```
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}
