//! Asset lookup and listing.

use serde::Serialize;

use crate::client::{AlpacaClient, Host};
use crate::error::Lookup;
use crate::models::{Asset, AssetClass, AssetStatus, Symbol};
use crate::Result;

impl AlpacaClient {
    /// Get one asset by symbol.
    ///
    /// An unknown symbol is reported as a generic
    /// [`Error::Api`](crate::Error::Api) with status 404.
    pub async fn asset(&self, symbol: &Symbol) -> Result<Asset> {
        self.inner
            .get(
                &format!("/v2/assets/{}", urlencoding::encode(symbol.as_str())),
                Lookup::Resource,
            )
            .await
    }

    /// List assets, optionally filtered by status and class.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alpaca_trade_rs::models::{AssetClass, AssetStatus};
    ///
    /// # async fn example(client: alpaca_trade_rs::AlpacaClient) -> alpaca_trade_rs::Result<()> {
    /// let assets = client
    ///     .assets(Some(AssetStatus::Active), Some(AssetClass::UsEquity))
    ///     .await?;
    /// let tradable = assets.iter().filter(|a| a.tradable).count();
    /// println!("{tradable} tradable equities");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn assets(
        &self,
        status: Option<AssetStatus>,
        asset_class: Option<AssetClass>,
    ) -> Result<Vec<Asset>> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<AssetStatus>,
            #[serde(skip_serializing_if = "Option::is_none")]
            asset_class: Option<AssetClass>,
        }

        self.inner
            .get_with_query(Host::Trading, "/v2/assets", &Query { status, asset_class })
            .await
    }
}
