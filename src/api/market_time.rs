//! Market calendar and clock.

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::{AlpacaClient, Host};
use crate::error::Lookup;
use crate::models::{Calendar, Clock};
use crate::Result;

impl AlpacaClient {
    /// Get the trading days between `start` and `end`, both inclusive.
    ///
    /// Non-trading days are absent from the result, so a single-day range
    /// over a weekend or holiday is empty.
    pub async fn calendar(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Calendar>> {
        #[derive(Serialize)]
        struct Query {
            start: NaiveDate,
            end: NaiveDate,
        }

        self.inner
            .get_with_query(Host::Trading, "/v1/calendar", &Query { start, end })
            .await
    }

    /// Get the market clock.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: alpaca_trade_rs::AlpacaClient) -> alpaca_trade_rs::Result<()> {
    /// let clock = client.clock().await?;
    /// if !clock.is_open {
    ///     println!("Market opens at {}", clock.next_open);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn clock(&self) -> Result<Clock> {
        self.inner.get("/v1/clock", Lookup::Resource).await
    }

    /// Whether the market is open right now, according to the server clock.
    pub async fn is_market_open(&self) -> Result<bool> {
        Ok(self.clock().await?.is_open)
    }
}
