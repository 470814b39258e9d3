//! Primitive types and newtypes for type-safe API interactions.
//!
//! Order ids and symbols are both plain strings on the wire; wrapping them
//! keeps `client.order(&symbol)` from compiling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed order ID (a server-assigned UUID string).
///
/// # Example
///
/// ```
/// use alpaca_trade_rs::OrderId;
///
/// let id = OrderId::new("904837e3-3b76-47ec-b432-046db621571b");
/// println!("Order: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new order ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A trading symbol (e.g., "AAPL", "SPY").
///
/// # Example
///
/// ```
/// use alpaca_trade_rs::Symbol;
///
/// let symbol = Symbol::new("AAPL");
/// assert_eq!(symbol.as_str(), "AAPL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which Alpaca trading endpoint to talk to.
///
/// # Example
///
/// ```
/// use alpaca_trade_rs::Environment;
///
/// let env = Environment::Paper;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live trading with real money.
    Live,
    /// Paper trading against simulated fills.
    #[default]
    Paper,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Live => "https://api.alpaca.markets",
            Environment::Paper => "https://paper-api.alpaca.markets",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the paper environment.
    pub fn is_paper(&self) -> bool {
        matches!(self, Environment::Paper)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Live => write!(f, "live"),
            Environment::Paper => write!(f, "paper"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id() {
        let id = OrderId::new("61e69015-8549-4bfd-b9c3-01e75843f47d");
        assert_eq!(id.as_str(), "61e69015-8549-4bfd-b9c3-01e75843f47d");
        assert_eq!(id.to_string(), "61e69015-8549-4bfd-b9c3-01e75843f47d");
    }

    #[test]
    fn test_symbol() {
        let symbol: Symbol = "AAPL".into();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"AAPL\"");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Live.api_base_url(), "https://api.alpaca.markets");
        assert_eq!(
            Environment::Paper.api_base_url(),
            "https://paper-api.alpaca.markets"
        );
        assert!(Environment::default().is_paper());
    }
}
