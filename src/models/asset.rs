//! Asset model.

use serde::{Deserialize, Serialize};

use super::enums::{AssetClass, AssetStatus};

/// A tradable asset from `/v2/assets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset id
    pub id: String,
    /// Asset class
    #[serde(rename = "class", alias = "asset_class")]
    pub asset_class: AssetClass,
    /// Primary listing exchange
    pub exchange: String,
    /// Ticker symbol
    pub symbol: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Listing status
    pub status: AssetStatus,
    /// Whether the asset can be traded through Alpaca
    pub tradable: bool,
    /// Whether the asset is marginable
    #[serde(default)]
    pub marginable: bool,
    /// Whether the asset can be sold short
    #[serde(default)]
    pub shortable: bool,
    /// Whether the asset is easy to borrow
    #[serde(default)]
    pub easy_to_borrow: bool,
    /// Whether fractional orders are accepted
    #[serde(default)]
    pub fractionable: bool,
}
