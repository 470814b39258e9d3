//! Account operations.

use crate::client::AlpacaClient;
use crate::error::Lookup;
use crate::models::Account;
use crate::Result;

impl AlpacaClient {
    /// Get the account tied to the configured credentials.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: alpaca_trade_rs::AlpacaClient) -> alpaca_trade_rs::Result<()> {
    /// let account = client.account().await?;
    /// println!("{:?}: {} {}", account.status, account.buying_power, account.currency);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn account(&self) -> Result<Account> {
        self.inner.get("/v2/account", Lookup::Resource).await
    }
}
