//! Open positions.

use crate::client::AlpacaClient;
use crate::error::Lookup;
use crate::models::{Position, Symbol};
use crate::Result;

impl AlpacaClient {
    /// Get the open position in one symbol.
    ///
    /// Without an open position this is
    /// [`Error::NoPositionForSymbol`](crate::Error::NoPositionForSymbol).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alpaca_trade_rs::{Error, Symbol};
    ///
    /// # async fn example(client: alpaca_trade_rs::AlpacaClient) -> alpaca_trade_rs::Result<()> {
    /// match client.position(&Symbol::new("AAPL")).await {
    ///     Ok(position) => println!("Holding {} shares", position.qty),
    ///     Err(Error::NoPositionForSymbol { .. }) => println!("Flat"),
    ///     Err(err) => return Err(err),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn position(&self, symbol: &Symbol) -> Result<Position> {
        self.inner
            .get(
                &format!("/v2/positions/{}", urlencoding::encode(symbol.as_str())),
                Lookup::Position(symbol.clone()),
            )
            .await
    }

    /// List all open positions.
    pub async fn positions(&self) -> Result<Vec<Position>> {
        self.inner.get("/v2/positions", Lookup::Resource).await
    }
}
