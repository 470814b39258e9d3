//! Market calendar and clock models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// One trading day from `/v1/calendar`.
///
/// Open and close are exchange-local (US Eastern) wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// The trading day
    pub date: NaiveDate,
    /// Regular session open
    #[serde(deserialize_with = "super::de::market_time")]
    pub open: NaiveTime,
    /// Regular session close
    #[serde(deserialize_with = "super::de::market_time")]
    pub close: NaiveTime,
    /// Extended session open as `HHMM`
    #[serde(default)]
    pub session_open: Option<String>,
    /// Extended session close as `HHMM`
    #[serde(default)]
    pub session_close: Option<String>,
}

/// Market clock snapshot from `/v1/clock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Server time when the snapshot was taken
    pub timestamp: DateTime<Utc>,
    /// Whether the market is open right now
    pub is_open: bool,
    /// Next regular session open
    pub next_open: DateTime<Utc>,
    /// Next regular session close
    pub next_close: DateTime<Utc>,
}

impl Clock {
    /// Time until the next open, or `None` while the market is open.
    pub fn time_to_open(&self) -> Option<chrono::Duration> {
        (!self.is_open).then(|| self.next_open - self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calendar() {
        let json = r#"{"date": "2018-01-03", "open": "09:30", "close": "16:00"}"#;
        let day: Calendar = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2018, 1, 3).unwrap());
        assert_eq!(day.open, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(day.close, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
        assert_eq!(day.session_open, None);
    }

    #[test]
    fn test_deserialize_clock_normalises_offsets() {
        let json = r#"{
            "timestamp": "2018-04-01T12:00:00.000-04:00",
            "is_open": false,
            "next_open": "2018-04-02T09:30:00-04:00",
            "next_close": "2018-04-02T16:00:00-04:00"
        }"#;
        let clock: Clock = serde_json::from_str(json).unwrap();
        assert_eq!(clock.timestamp.to_rfc3339(), "2018-04-01T16:00:00+00:00");
        assert!(!clock.is_open);
        assert_eq!(
            clock.time_to_open(),
            Some(chrono::Duration::minutes(21 * 60 + 30))
        );
    }

    #[test]
    fn test_clock_requires_is_open() {
        let json = r#"{
            "timestamp": "2018-04-01T12:00:00Z",
            "next_open": "2018-04-02T13:30:00Z",
            "next_close": "2018-04-02T20:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Clock>(json).is_err());
    }
}
