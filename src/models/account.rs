//! Account model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::AccountStatus;

/// Trading account state from `/v2/account`.
///
/// Monetary fields arrive as JSON strings and decode to [`Decimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account id
    pub id: String,
    /// Human-facing account number
    #[serde(default)]
    pub account_number: Option<String>,
    /// Lifecycle status
    pub status: AccountStatus,
    /// Account currency (e.g. "USD")
    pub currency: String,
    /// Cash available for new positions, including margin
    pub buying_power: Decimal,
    /// Cash balance
    pub cash: Decimal,
    /// Total value of cash and positions
    pub portfolio_value: Decimal,
    /// Whether the account is flagged as a pattern day trader
    pub pattern_day_trader: bool,
    /// Cash that can be withdrawn
    #[serde(default)]
    pub cash_withdrawable: Option<Decimal>,
    /// Equity as of now
    #[serde(default)]
    pub equity: Option<Decimal>,
    /// Equity as of the previous close
    #[serde(default)]
    pub last_equity: Option<Decimal>,
    /// Market value of long positions
    #[serde(default)]
    pub long_market_value: Option<Decimal>,
    /// Market value of short positions
    #[serde(default)]
    pub short_market_value: Option<Decimal>,
    /// Buying power multiplier
    #[serde(default)]
    pub multiplier: Option<Decimal>,
    /// Number of day trades in the last five sessions
    #[serde(default)]
    pub daytrade_count: Option<i64>,
    /// Trading is blocked
    #[serde(default)]
    pub trading_blocked: bool,
    /// Transfers are blocked
    #[serde(default)]
    pub transfers_blocked: bool,
    /// The account is blocked entirely
    #[serde(default)]
    pub account_blocked: bool,
    /// Short selling is enabled
    #[serde(default)]
    pub shorting_enabled: bool,
    /// The user suspended trading themselves
    #[serde(default)]
    pub trade_suspended_by_user: bool,
    /// When the account was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Returns `true` if the account is active and nothing blocks trading.
    pub fn can_trade(&self) -> bool {
        self.status.is_active()
            && !self.trading_blocked
            && !self.account_blocked
            && !self.trade_suspended_by_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "id": "904837e3-3b76-47ec-b432-046db621571b",
            "status": "ACTIVE",
            "currency": "USD",
            "buying_power": "4000.32",
            "cash": "4000.32",
            "cash_withdrawable": "4000.32",
            "portfolio_value": "4321.98",
            "pattern_day_trader": false,
            "trading_blocked": false,
            "transfers_blocked": false,
            "account_blocked": false,
            "created_at": "2018-10-01T13:35:25.813Z"
        })
    }

    #[test]
    fn test_deserialize_account() {
        let account: Account = serde_json::from_value(sample()).unwrap();
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.currency, "USD");
        assert_eq!(account.buying_power, dec!(4000.32));
        assert_eq!(account.portfolio_value, dec!(4321.98));
        assert!(!account.pattern_day_trader);
        assert!(account.can_trade());
        assert!(account.created_at.is_some());
    }

    #[test]
    fn test_numeric_buying_power_is_exact() {
        let mut json = sample();
        json["buying_power"] = serde_json::from_str("262113.632000000000001").unwrap();

        let account: Account = serde_json::from_value(json).unwrap();
        assert_eq!(account.buying_power, dec!(262113.632000000000001));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut json = sample();
        json.as_object_mut().unwrap().remove("currency");
        assert!(serde_json::from_value::<Account>(json).is_err());
    }

    #[test]
    fn test_non_numeric_buying_power_fails() {
        let mut json = sample();
        json["buying_power"] = serde_json::json!("lots");
        assert!(serde_json::from_value::<Account>(json).is_err());
    }

    #[test]
    fn test_boolean_must_be_canonical() {
        let mut json = sample();
        json["pattern_day_trader"] = serde_json::json!("false");
        assert!(serde_json::from_value::<Account>(json.clone()).is_err());

        json["pattern_day_trader"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Account>(json).is_err());
    }
}
