//! Order models for placing and managing trades.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::*;
use super::primitives::OrderId;

/// A new order to be submitted to `/v2/orders`.
///
/// Every field is optional and only the fields that are set are sent. The
/// client does not check that a usable combination was provided; the
/// server answers an incomplete order with
/// [`Error::MissingParameters`](crate::Error::MissingParameters).
///
/// # Example
///
/// ```
/// use alpaca_trade_rs::models::{NewOrder, OrderSide, TimeInForce};
/// use rust_decimal_macros::dec;
///
/// let order = NewOrder::limit("AAPL", dec!(10), OrderSide::Buy, dec!(150.00))
///     .time_in_force(TimeInForce::Gtc)
///     .client_order_id("my-first-order");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Symbol to trade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Number of shares
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,
    /// Buy or sell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Limit price (limit and stop-limit orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    /// Stop price (stop and stop-limit orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Client-chosen unique identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    /// Allow execution in pre- and post-market sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_hours: Option<bool>,
}

impl NewOrder {
    /// Create an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// A day market order.
    pub fn market(symbol: impl Into<String>, qty: Decimal, side: OrderSide) -> Self {
        Self::new()
            .symbol(symbol)
            .qty(qty)
            .side(side)
            .order_type(OrderType::Market)
            .time_in_force(TimeInForce::Day)
    }

    /// A day limit order.
    pub fn limit(
        symbol: impl Into<String>,
        qty: Decimal,
        side: OrderSide,
        limit_price: Decimal,
    ) -> Self {
        Self::new()
            .symbol(symbol)
            .qty(qty)
            .side(side)
            .order_type(OrderType::Limit)
            .time_in_force(TimeInForce::Day)
            .limit_price(limit_price)
    }

    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the quantity.
    pub fn qty(mut self, qty: Decimal) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Set the side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the order type.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the limit price.
    pub fn limit_price(mut self, price: Decimal) -> Self {
        self.limit_price = Some(price);
        self
    }

    /// Set the stop price.
    pub fn stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    /// Set a client order id.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Allow or forbid extended-hours execution.
    pub fn extended_hours(mut self, enabled: bool) -> Self {
        self.extended_hours = Some(enabled);
        self
    }
}

/// An order as reported by the server.
///
/// Each fetch is a fresh snapshot; the server keeps changing the order
/// after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned id
    pub id: OrderId,
    /// Client order id (server-generated if none was given)
    pub client_order_id: String,
    /// When the order was created
    pub created_at: DateTime<Utc>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the order was submitted
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the order was filled
    #[serde(default)]
    pub filled_at: Option<DateTime<Utc>>,
    /// When the order expired
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    /// When the order was cancelled
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    /// When the order failed
    #[serde(default)]
    pub failed_at: Option<DateTime<Utc>>,
    /// Asset id
    pub asset_id: String,
    /// Symbol
    pub symbol: String,
    /// Asset class
    pub asset_class: AssetClass,
    /// Ordered quantity (absent for notional orders)
    #[serde(default)]
    pub qty: Option<Decimal>,
    /// Ordered dollar amount (notional orders)
    #[serde(default)]
    pub notional: Option<Decimal>,
    /// Filled quantity
    pub filled_qty: Decimal,
    /// Average fill price
    #[serde(default)]
    pub filled_avg_price: Option<Decimal>,
    /// Order type
    #[serde(rename = "type", alias = "order_type")]
    pub order_type: OrderType,
    /// Side
    pub side: OrderSide,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Limit price
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Stop price
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Status
    pub status: OrderStatus,
    /// Eligible for extended hours
    #[serde(default)]
    pub extended_hours: bool,
}

impl Order {
    /// Quantity still to be filled.
    pub fn remaining_qty(&self) -> Option<Decimal> {
        self.qty.map(|qty| qty - self.filled_qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_serializes_only_set_fields() {
        let order = NewOrder::new()
            .symbol("AAPL")
            .qty(dec!(15))
            .side(OrderSide::Buy)
            .order_type(OrderType::Limit)
            .time_in_force(TimeInForce::Day);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "symbol": "AAPL",
                "qty": "15",
                "side": "buy",
                "type": "limit",
                "time_in_force": "day"
            })
        );
    }

    #[test]
    fn test_limit_constructor() {
        let order = NewOrder::limit("SPY", dec!(1), OrderSide::Sell, dec!(412.50));
        assert_eq!(order.order_type, Some(OrderType::Limit));
        assert_eq!(order.limit_price, Some(dec!(412.50)));
        assert_eq!(order.time_in_force, Some(TimeInForce::Day));
    }

    #[test]
    fn test_deserialize_order() {
        let json = r#"{
            "id": "904837e3-3b76-47ec-b432-046db621571b",
            "client_order_id": "904837e3-3b76-47ec-b432-046db621571b",
            "created_at": "2018-10-05T05:48:59Z",
            "updated_at": "2018-10-05T05:48:59Z",
            "submitted_at": "2018-10-05T05:48:59Z",
            "filled_at": null,
            "expired_at": null,
            "canceled_at": null,
            "failed_at": null,
            "asset_id": "904837e3-3b76-47ec-b432-046db621571b",
            "symbol": "AAPL",
            "asset_class": "us_equity",
            "qty": "15",
            "filled_qty": "0",
            "type": "limit",
            "side": "buy",
            "time_in_force": "day",
            "limit_price": "107.00",
            "stop_price": null,
            "filled_avg_price": null,
            "status": "new"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id.as_str(), "904837e3-3b76-47ec-b432-046db621571b");
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.limit_price, Some(dec!(107.00)));
        assert_eq!(order.stop_price, None);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.remaining_qty(), Some(dec!(15)));
        assert!(!order.extended_hours);
    }
}
