//! Enumeration types for the Alpaca API.
//!
//! Wire values are the lowercase (or upper snake case, for account status)
//! strings Alpaca sends. A value outside the listed set is a decode error,
//! except for [`AssetClass`], which falls back to `Unknown`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a brokerage account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Application is being filled in
    Onboarding,
    /// Application submission failed
    SubmissionFailed,
    /// Application submitted, under review
    Submitted,
    /// Account details updated, under review
    AccountUpdated,
    /// Waiting on final approval
    ApprovalPending,
    /// Account is open for trading
    Active,
    /// Application was rejected
    Rejected,
}

impl AccountStatus {
    /// Returns `true` if the account can trade.
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

/// Class of a tradable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// US listed equities and ETFs
    #[default]
    UsEquity,
    /// Cryptocurrency pairs
    Crypto,
    /// US listed options
    UsOption,
    /// Any class this crate does not know about yet
    #[serde(other)]
    Unknown,
}

impl AssetClass {
    /// The query-string value for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::UsEquity => "us_equity",
            AssetClass::Crypto => "crypto",
            AssetClass::UsOption => "us_option",
            AssetClass::Unknown => "unknown",
        }
    }
}

/// Whether an asset is currently listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Listed and available
    Active,
    /// Delisted or halted indefinitely
    Inactive,
}

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

/// How an order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Execute immediately at the market price
    Market,
    /// Execute at the limit price or better
    Limit,
    /// Becomes a market order once the stop price trades
    Stop,
    /// Becomes a limit order once the stop price trades
    StopLimit,
    /// Stop that follows the price by a fixed amount or percent
    TrailingStop,
}

impl OrderType {
    /// Returns `true` if the server requires a `limit_price` for this type.
    pub fn requires_limit_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopLimit)
    }
}

/// How long an order stays working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Until the end of the regular session
    Day,
    /// Good till cancelled
    Gtc,
    /// Market or limit on open
    Opg,
    /// Market or limit on close
    Cls,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

/// Current status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Received and routed
    New,
    /// Partially filled, still working
    PartiallyFilled,
    /// Completely filled
    Filled,
    /// Done for the trading day
    DoneForDay,
    /// Cancelled
    Canceled,
    /// Expired per time in force
    Expired,
    /// Replaced by another order
    Replaced,
    /// Cancel requested
    PendingCancel,
    /// Replace requested
    PendingReplace,
    /// Accepted but not yet routed
    Accepted,
    /// Received but not yet accepted
    PendingNew,
    /// Accepted for bidding (auctions)
    AcceptedForBidding,
    /// Stopped, a fill is guaranteed
    Stopped,
    /// Rejected
    Rejected,
    /// Suspended
    Suspended,
    /// Filled, awaiting settlement calculations
    Calculated,
}

impl OrderStatus {
    /// Returns `true` if the order can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled
                | OrderStatus::Canceled
                | OrderStatus::Expired
                | OrderStatus::Replaced
                | OrderStatus::Rejected
                | OrderStatus::DoneForDay
        )
    }
}

/// Which orders to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderQueryStatus {
    /// Working orders only (the server default)
    #[default]
    Open,
    /// Terminal orders only
    Closed,
    /// Every order
    All,
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

/// Side of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long
    Long,
    /// Short
    Short,
}

/// Aggregation period for historical bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    /// One-minute bars
    Minute,
    /// Five-minute bars
    FiveMinutes,
    /// Fifteen-minute bars
    FifteenMinutes,
    /// Daily bars
    Day,
}

impl Timeframe {
    /// The path segment for this timeframe.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Minute => "1Min",
            Timeframe::FiveMinutes => "5Min",
            Timeframe::FifteenMinutes => "15Min",
            Timeframe::Day => "1D",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
