//! Open position model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AssetClass, PositionSide};

/// An open position from `/v2/positions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Asset id
    pub asset_id: String,
    /// Symbol
    pub symbol: String,
    /// Exchange
    pub exchange: String,
    /// Asset class
    pub asset_class: AssetClass,
    /// Average entry price
    pub avg_entry_price: Decimal,
    /// Shares held (negative for short positions)
    pub qty: Decimal,
    /// Long or short
    pub side: PositionSide,
    /// Current market value
    pub market_value: Decimal,
    /// Total cost basis
    pub cost_basis: Decimal,
    /// Unrealized profit or loss
    pub unrealized_pl: Decimal,
    /// Unrealized profit or loss as a fraction of cost
    #[serde(default)]
    pub unrealized_plpc: Option<Decimal>,
    /// Unrealized profit or loss for the day
    #[serde(default)]
    pub unrealized_intraday_pl: Option<Decimal>,
    /// Intraday unrealized profit or loss as a fraction
    #[serde(default)]
    pub unrealized_intraday_plpc: Option<Decimal>,
    /// Last price
    #[serde(default)]
    pub current_price: Option<Decimal>,
    /// Previous close
    #[serde(default)]
    pub lastday_price: Option<Decimal>,
    /// Change since the previous close, as a fraction
    #[serde(default)]
    pub change_today: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_position() {
        let json = r#"{
            "asset_id": "904837e3-3b76-47ec-b432-046db621571b",
            "symbol": "AAPL",
            "exchange": "NASDAQ",
            "asset_class": "us_equity",
            "avg_entry_price": "100.0",
            "qty": "5",
            "side": "long",
            "market_value": "600.0",
            "cost_basis": "500.0",
            "unrealized_pl": "100.0",
            "unrealized_plpc": "0.20",
            "current_price": "120.0",
            "lastday_price": "119.0",
            "change_today": "0.0084"
        }"#;

        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.symbol, "AAPL");
        assert_eq!(position.qty, dec!(5));
        assert_eq!(position.side, PositionSide::Long);
        assert_eq!(position.market_value, dec!(600));
        assert_eq!(position.unrealized_pl, dec!(100));
        assert_eq!(position.unrealized_intraday_pl, None);
    }

    #[test]
    fn test_missing_unrealized_pl_fails() {
        let json = r#"{
            "asset_id": "1", "symbol": "AAPL", "exchange": "NASDAQ",
            "asset_class": "us_equity", "avg_entry_price": "1", "qty": "1",
            "side": "long", "market_value": "1", "cost_basis": "1"
        }"#;
        assert!(serde_json::from_str::<Position>(json).is_err());
    }
}
