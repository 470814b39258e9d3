//! Error types for the Alpaca API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is the closed [`Error`] enum. HTTP failures are mapped onto a
//! specific variant purely from the response status, the response body and
//! the lookup context the request was made with, so callers can match
//! exhaustively on what went wrong.

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::models::{OrderId, Symbol};

/// A specialized `Result` type for Alpaca operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Alpaca API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request was rejected because the credentials are missing or wrong (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    /// The API rate limit was exceeded (429). Nothing is retried.
    #[error("Rate limited: {0}")]
    RateLimited(ErrorResponse),

    /// The server failed to handle the request (5xx).
    #[error("Internal server error: {0}")]
    InternalServer(ErrorResponse),

    /// The order would exceed the account's buying power (422).
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(ErrorResponse),

    /// The request was missing required fields (422).
    #[error("Missing parameters {fields:?}: {response}")]
    MissingParameters {
        /// Names of the missing fields, when the server reports them
        fields: Vec<String>,
        /// The underlying error response
        response: ErrorResponse,
    },

    /// No order exists with the given id (404 on an order lookup).
    #[error("Invalid order id {order_id}: {response}")]
    InvalidOrderId {
        /// The order id that was looked up
        order_id: OrderId,
        /// The underlying error response
        response: ErrorResponse,
    },

    /// There is no open position for the given symbol (404 on a position lookup).
    #[error("No position for symbol {symbol}: {response}")]
    NoPositionForSymbol {
        /// The symbol that was looked up
        symbol: Symbol,
        /// The underlying error response
        response: ErrorResponse,
    },

    /// Any other non-2xx response.
    #[error("API error: {0}")]
    Api(ErrorResponse),

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request could not be sent or the response could not be read
    /// (unreachable host, connection reset, TLS failure).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration could not be bootstrapped.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Context shared by every HTTP-level error variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Alpaca error code, if the body carried one
    pub code: Option<i64>,
    /// Human-readable message derived from the body
    pub message: String,
    /// Raw response body
    pub body: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status={}, message={}", self.status, self.message)
    }
}

impl ErrorResponse {
    /// Build the error context from a status code and a raw body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let json = serde_json::from_str::<Value>(&body).ok();

        let code = json
            .as_ref()
            .and_then(|v| v.get("code"))
            .and_then(Value::as_i64);

        let message = json
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown API error")
                    .to_string()
            });

        Self {
            status,
            code,
            message,
            body,
        }
    }

    /// The response body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// What a 404 means for the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Lookup {
    /// A plain resource request; 404 is a generic API error.
    #[default]
    Resource,
    /// A lookup of one order by id.
    Order(OrderId),
    /// A lookup of the open position in one symbol.
    Position(Symbol),
}

impl Error {
    /// Map a non-2xx response onto its error variant.
    ///
    /// The first matching rule wins: 401, 429, 5xx, 422 insufficient
    /// buying power, 422 missing parameters, 404 by lookup, then generic.
    pub(crate) fn from_response(status: u16, body: impl Into<String>, lookup: &Lookup) -> Self {
        let response = ErrorResponse::new(status, body);

        match status {
            401 => Error::Unauthorized(response),
            429 => Error::RateLimited(response),
            500..=599 => Error::InternalServer(response),
            422 if is_insufficient_funds(&response) => Error::InsufficientFunds(response),
            422 => match missing_fields(&response) {
                Some(fields) => Error::MissingParameters { fields, response },
                None => Error::Api(response),
            },
            404 => match lookup {
                Lookup::Order(order_id) => Error::InvalidOrderId {
                    order_id: order_id.clone(),
                    response,
                },
                Lookup::Position(symbol) => Error::NoPositionForSymbol {
                    symbol: symbol.clone(),
                    response,
                },
                Lookup::Resource => Error::Api(response),
            },
            _ => Error::Api(response),
        }
    }

    /// The error response for HTTP-level failures.
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Unauthorized(response)
            | Error::RateLimited(response)
            | Error::InternalServer(response)
            | Error::InsufficientFunds(response)
            | Error::Api(response)
            | Error::MissingParameters { response, .. }
            | Error::InvalidOrderId { response, .. }
            | Error::NoPositionForSymbol { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            other => other.response().map(|r| r.status),
        }
    }

    /// Returns `true` if this error is potentially transient.
    ///
    /// The client never retries on its own; this only tells the caller
    /// whether trying again could succeed.
    ///
    /// # Example
    ///
    /// ```
    /// use alpaca_trade_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Backing off before trying again...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::RateLimited(_) | Error::InternalServer(_)
        )
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Config(_) | Error::UrlParse(_) => true,
            other => other
                .response()
                .is_some_and(|r| (400..500).contains(&r.status)),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::InternalServer(_))
    }
}

fn is_insufficient_funds(response: &ErrorResponse) -> bool {
    response
        .message
        .to_lowercase()
        .contains("insufficient buying power")
}

/// Field names for a missing-parameters response, or `None` if the
/// response is some other kind of 422.
fn missing_fields(response: &ErrorResponse) -> Option<Vec<String>> {
    let listed = response.json().and_then(|json| {
        json.get("fields").and_then(Value::as_array).map(|fields| {
            fields
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    });
    if listed.is_some() {
        return listed;
    }

    let lower = response.message.to_lowercase();
    if !(lower.contains("required") || lower.contains("missing")) {
        return None;
    }

    Some(fields_from_message(&response.message))
}

/// Pull field names out of messages such as `"qty is required"`,
/// `"limit_price and side are required"` or `"missing fields: qty, side"`.
/// Names keep the spelling the server used.
fn fields_from_message(message: &str) -> Vec<String> {
    // ASCII lowercasing keeps byte offsets valid for `message`
    let lower = message.to_ascii_lowercase();

    let list = if let Some(idx) = lower
        .find(" is required")
        .or_else(|| lower.find(" are required"))
    {
        let head = &message[..idx];
        head.rfind(':').map_or(head, |colon| &head[colon + 1..])
    } else if let Some(idx) = lower.find("missing") {
        match lower[idx..].find(':') {
            Some(colon) => &message[idx + colon + 1..],
            None => return Vec::new(),
        }
    } else {
        return Vec::new();
    };

    list.split(|c: char| c == ',' || c.is_whitespace())
        .map(|part| part.trim_matches(|c: char| !(c.is_alphanumeric() || c == '_')))
        .filter(|part| !part.is_empty() && !part.eq_ignore_ascii_case("and"))
        .map(str::to_string)
        .collect()
}
