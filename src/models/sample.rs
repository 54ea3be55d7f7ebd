//! Throughput sample type produced by the rolling z-score CSV parser.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One date-stamped point of a city's rolling z-score series.
///
/// Produced by parsing one CSV row. Rows lacking a parseable date or a
/// numeric z-score are never turned into samples; they are dropped at
/// parse time instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputSample {
    /// Display date, e.g. "Jan 05, 2024"
    pub date: String,
    /// Short display date for dense axes, e.g. "01/05"
    pub date_short: String,
    /// Mean throughput in Mbps, if the row carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<f64>,
    /// Rolling z-score of mean throughput
    pub z_score: Option<f64>,
    /// Rolling z-score of loss rate
    pub z_loss_rate: Option<f64>,
    /// Raw date string as it appeared in the CSV
    pub full_date: String,
    /// Epoch milliseconds (UTC midnight for date-only rows)
    pub timestamp: i64,
}

impl ThroughputSample {
    /// Build a sample from a parsed date and the row's numeric fields.
    pub fn new(
        date: NaiveDateTime,
        raw_date: &str,
        throughput: Option<f64>,
        z_score: Option<f64>,
        z_loss_rate: Option<f64>,
    ) -> Self {
        Self {
            date: date.format("%b %d, %Y").to_string(),
            date_short: date.format("%m/%d").to_string(),
            throughput,
            z_score,
            z_loss_rate,
            full_date: raw_date.to_string(),
            timestamp: date.and_utc().timestamp_millis(),
        }
    }
}

/// Parse a CSV `Date` value.
///
/// Accepts full timestamps (`2024-01-05 12:00:00`, `2024-01-05T12:00:00`)
/// and bare dates (`2024-01-05`, mapped to UTC midnight).
pub fn parse_csv_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod sample_tests;
