//! Historical bars.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::{AlpacaClient, Host};
use crate::models::{BarSet, Symbol, Timeframe};
use crate::Result;

/// Optional parameters for a bars request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BarsQuery {
    /// Maximum number of bars per symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Bars at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Bars at or before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Bars strictly after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    /// Bars strictly before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

impl AlpacaClient {
    /// Get bars for one or more symbols.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alpaca_trade_rs::models::Timeframe;
    /// use alpaca_trade_rs::Symbol;
    ///
    /// # async fn example(client: alpaca_trade_rs::AlpacaClient) -> alpaca_trade_rs::Result<()> {
    /// let symbols = [Symbol::new("AAPL"), Symbol::new("MSFT")];
    /// let bars = client.bars(Timeframe::Day, &symbols).await?;
    /// for (symbol, series) in bars.iter() {
    ///     if let Some(last) = series.last() {
    ///         println!("{symbol}: closed at {}", last.close);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn bars(&self, timeframe: Timeframe, symbols: &[Symbol]) -> Result<BarSet> {
        self.bars_with_query(timeframe, symbols, &BarsQuery::default())
            .await
    }

    /// Get bars with a limit and/or time window.
    pub async fn bars_with_query(
        &self,
        timeframe: Timeframe,
        symbols: &[Symbol],
        query: &BarsQuery,
    ) -> Result<BarSet> {
        #[derive(Serialize)]
        struct Query<'a> {
            symbols: String,
            #[serde(flatten)]
            query: &'a BarsQuery,
        }

        let symbols_param = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let body: Value = self
            .inner
            .get_with_query(
                Host::Data,
                &format!("/v1/bars/{timeframe}"),
                &Query {
                    symbols: symbols_param,
                    query,
                },
            )
            .await?;

        BarSet::decode(body, symbols)
    }
}
