//! Order placement and management.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{AlpacaClient, Host};
use crate::error::Lookup;
use crate::models::{NewOrder, Order, OrderId, OrderQueryStatus, SortDirection};
use crate::Result;

/// Query parameters for listing orders.
///
/// Unset fields are left out of the query string and take the server
/// defaults (open orders, newest first, 50 results).
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrdersQuery {
    /// Which orders to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderQueryStatus>,
    /// Maximum number of orders to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only orders submitted after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    /// Only orders submitted until this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    /// Sort order by submission time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl AlpacaClient {
    /// Submit a new order.
    ///
    /// Nothing is checked before sending. Incomplete orders come back as
    /// [`Error::MissingParameters`](crate::Error::MissingParameters) and
    /// orders larger than the buying power as
    /// [`Error::InsufficientFunds`](crate::Error::InsufficientFunds).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alpaca_trade_rs::models::{NewOrder, OrderSide};
    /// use rust_decimal_macros::dec;
    ///
    /// # async fn example(client: alpaca_trade_rs::AlpacaClient) -> alpaca_trade_rs::Result<()> {
    /// let order = client
    ///     .new_order(&NewOrder::limit("AAPL", dec!(10), OrderSide::Buy, dec!(150.00)))
    ///     .await?;
    /// println!("Order {} is {:?}", order.id, order.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new_order(&self, order: &NewOrder) -> Result<Order> {
        self.inner.post("/v2/orders", order).await
    }

    /// Get one order by id.
    pub async fn order(&self, order_id: &OrderId) -> Result<Order> {
        self.inner
            .get(
                &format!("/v2/orders/{}", urlencoding::encode(order_id.as_str())),
                Lookup::Order(order_id.clone()),
            )
            .await
    }

    /// Get one order by the client order id it was submitted with.
    ///
    /// An unknown client order id is a generic
    /// [`Error::Api`](crate::Error::Api) with status 404, since there is no
    /// server order id to report.
    pub async fn order_by_client_order_id(&self, client_order_id: &str) -> Result<Order> {
        #[derive(Serialize)]
        struct Query<'a> {
            client_order_id: &'a str,
        }

        self.inner
            .request(
                reqwest::Method::GET,
                Host::Trading,
                "/v2/orders:by_client_order_id",
                Some(&Query { client_order_id }),
                None::<&()>,
                Lookup::Resource,
            )
            .await
    }

    /// List orders, most recent first, capped at `limit`.
    pub async fn orders(
        &self,
        status: Option<OrderQueryStatus>,
        limit: Option<u32>,
    ) -> Result<Vec<Order>> {
        self.orders_with_query(&OrdersQuery {
            status,
            limit,
            ..Default::default()
        })
        .await
    }

    /// List orders with the full set of filters.
    pub async fn orders_with_query(&self, query: &OrdersQuery) -> Result<Vec<Order>> {
        self.inner
            .get_with_query(Host::Trading, "/v2/orders", query)
            .await
    }

    /// Cancel a working order.
    ///
    /// An unknown id is [`Error::InvalidOrderId`](crate::Error::InvalidOrderId);
    /// an order that can no longer be cancelled is a generic
    /// [`Error::Api`](crate::Error::Api) with status 422.
    pub async fn cancel_order(&self, order_id: &OrderId) -> Result<()> {
        self.inner
            .delete(
                &format!("/v2/orders/{}", urlencoding::encode(order_id.as_str())),
                Lookup::Order(order_id.clone()),
            )
            .await
    }
}
