//! API key credentials.
//!
//! Alpaca authenticates every request with two headers carrying the key id
//! and the secret key verbatim. There is no session, token exchange or
//! request signing.
//!
//! ```
//! use alpaca_trade_rs::Credentials;
//!
//! let credentials = Credentials::new("AKFZXJH121U18SHHDRFO", "pnq4YHlpMF3LhfLyOvmdfLmlz6BnASrTPQIASeiU");
//! assert_eq!(credentials.key_id(), "AKFZXJH121U18SHHDRFO");
//! // The secret never shows up in debug output.
//! assert!(!format!("{credentials:?}").contains("pnq4"));
//! ```

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Header carrying the key id.
pub const KEY_ID_HEADER: &str = "APCA-API-KEY-ID";

/// Header carrying the secret key.
pub const SECRET_KEY_HEADER: &str = "APCA-API-SECRET-KEY";

/// An API key id and secret pair.
pub struct Credentials {
    key_id: String,
    key_secret: SecretString,
}

impl Credentials {
    /// Create credentials from a key id and secret.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::from(key_secret.into()),
        }
    }

    /// The key id.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The secret key.
    pub(crate) fn key_secret(&self) -> &str {
        self.key_secret.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self::new(self.key_id.clone(), self.key_secret().to_string())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .finish()
    }
}
