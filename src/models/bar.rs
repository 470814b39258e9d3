//! Historical price bars.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::Symbol;
use crate::Result;

/// One OHLCV bar.
///
/// The wire format uses single-letter keys: `t` is the bar start in unix
/// seconds, `o`/`h`/`l`/`c` are prices and `v` is the share volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Start of the bar period
    #[serde(rename = "t", with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Opening price
    #[serde(rename = "o")]
    pub open: Decimal,
    /// Highest price
    #[serde(rename = "h")]
    pub high: Decimal,
    /// Lowest price
    #[serde(rename = "l")]
    pub low: Decimal,
    /// Closing price
    #[serde(rename = "c")]
    pub close: Decimal,
    /// Traded volume
    #[serde(rename = "v")]
    pub volume: u64,
}

/// Bars keyed by symbol, each sequence in server order (oldest first).
///
/// Every symbol present in the response is a key, including symbols the
/// server returned an empty list for and symbols that were not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarSet(BTreeMap<String, Vec<Bar>>);

impl BarSet {
    /// Decode a bars response body.
    ///
    /// An object is read as `{symbol: [bar, ...]}`. A bare array is the
    /// bars of the single requested symbol; with zero or several requested
    /// symbols there is nothing to attribute it to and decoding fails.
    pub fn decode(value: Value, requested: &[Symbol]) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let mut bars = BTreeMap::new();
                for (symbol, series) in map {
                    bars.insert(symbol, serde_json::from_value::<Vec<Bar>>(series)?);
                }
                Ok(Self(bars))
            }
            Value::Array(items) => match requested {
                [symbol] => {
                    let series = serde_json::from_value::<Vec<Bar>>(Value::Array(items))?;
                    Ok(Self(BTreeMap::from([(symbol.to_string(), series)])))
                }
                _ => Err(serde_json::Error::custom(format!(
                    "bars array cannot be attributed to {} requested symbols",
                    requested.len()
                ))
                .into()),
            },
            other => Err(serde_json::Error::custom(format!(
                "expected bars object or array, found {}",
                json_kind(&other)
            ))
            .into()),
        }
    }

    /// Bars for one symbol.
    pub fn get(&self, symbol: impl AsRef<str>) -> Option<&[Bar]> {
        self.0.get(symbol.as_ref()).map(Vec::as_slice)
    }

    /// Symbols in the set, in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(symbol, bars)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Bar])> {
        self.0.iter().map(|(s, b)| (s.as_str(), b.as_slice()))
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no symbol is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the set and return the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Vec<Bar>> {
        self.0
    }
}

impl IntoIterator for BarSet {
    type Item = (String, Vec<Bar>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<Bar>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn bar(t: i64, c: f64) -> Value {
        json!({ "t": t, "o": 172.26, "h": 172.3, "l": 172.16, "c": c, "v": 3892 })
    }

    #[test]
    fn test_deserialize_bar() {
        let bar: Bar = serde_json::from_value(bar(1544129220, 172.18)).unwrap();
        assert_eq!(bar.timestamp.timestamp(), 1544129220);
        assert_eq!(bar.open, dec!(172.26));
        assert_eq!(bar.close, dec!(172.18));
        assert_eq!(bar.volume, 3892);
    }

    #[test]
    fn test_numeric_prices_keep_full_precision() {
        let raw = r#"{
            "t": 1,
            "o": 1234567890.123456789012,
            "h": 1234567890.123456789019,
            "l": 0.1000000000000000000001,
            "c": 1234567890.123456789012,
            "v": 10
        }"#;

        let bar: Bar = serde_json::from_str(raw).unwrap();
        assert_eq!(bar.open, dec!(1234567890.123456789012));
        assert_eq!(bar.high, dec!(1234567890.123456789019));
        assert_eq!(bar.low, dec!(0.1000000000000000000001));

        let body: Value = serde_json::from_str(&format!(r#"{{"AAPL": [{raw}]}}"#)).unwrap();
        let set = BarSet::decode(body, &[Symbol::new("AAPL")]).unwrap();
        assert_eq!(set.get("AAPL").unwrap()[0].close, dec!(1234567890.123456789012));
    }

    #[test]
    fn test_decode_keyed_object_keeps_every_key_and_order() {
        let body = json!({
            "AAPL": [bar(1, 1.0), bar(2, 2.0), bar(3, 3.0)],
            "MSFT": [],
            "EXTRA": [bar(9, 9.0)]
        });
        let requested = [Symbol::new("AAPL"), Symbol::new("MSFT")];

        let set = BarSet::decode(body, &requested).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("MSFT"), Some(&[][..]));
        assert!(set.get("EXTRA").is_some());

        let closes: Vec<_> = set.get("AAPL").unwrap().iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![dec!(1), dec!(2), dec!(3)]);
    }

    #[test]
    fn test_decode_single_array_for_single_symbol() {
        let set = BarSet::decode(json!([bar(1, 1.5)]), &[Symbol::new("SPY")]).unwrap();
        assert_eq!(set.symbols().collect::<Vec<_>>(), vec!["SPY"]);
        assert_eq!(set.get("SPY").unwrap()[0].close, dec!(1.5));
    }

    #[test]
    fn test_decode_array_with_many_symbols_fails() {
        let requested = [Symbol::new("SPY"), Symbol::new("QQQ")];
        let err = BarSet::decode(json!([bar(1, 1.0)]), &requested).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_decode_bad_shape_fails() {
        assert!(matches!(
            BarSet::decode(json!("nope"), &[Symbol::new("SPY")]),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_one_bad_bar_fails_the_whole_set() {
        let body = json!({
            "AAPL": [bar(1, 1.0)],
            "MSFT": [{ "t": 1, "o": "abc", "h": 1, "l": 1, "c": 1, "v": 1 }]
        });
        assert!(BarSet::decode(body, &[]).is_err());
    }
}
