//! Deserialization helpers for wire formats serde and chrono do not read
//! out of the box.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer};

/// Market times are sent as `HH:MM`; accept `HH:MM:SS` too.
pub(crate) fn market_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&s), &"a time as HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "market_time")]
        at: NaiveTime,
    }

    #[test]
    fn test_market_time_formats() {
        let w: Wrapper = serde_json::from_str(r#"{"at": "09:30"}"#).unwrap();
        assert_eq!(w.at, NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        let w: Wrapper = serde_json::from_str(r#"{"at": "16:00:00"}"#).unwrap();
        assert_eq!(w.at, NaiveTime::from_hms_opt(16, 0, 0).unwrap());

        assert!(serde_json::from_str::<Wrapper>(r#"{"at": "noon"}"#).is_err());
    }
}
