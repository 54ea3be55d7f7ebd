//! Parser for per-city rolling z-score CSV files.
//!
//! The first line is a header row; every following line is matched
//! positionally against the headers. Required columns are `Date` and
//! `z90MeanThroughputMbps`; a row missing either (or carrying a
//! non-numeric z-score) is dropped entirely, never patched up. Optional
//! numeric columns become `None` when empty or non-numeric, never zero.

use std::io::Read;

use crate::data::error::{DataError, DataResult};
use crate::models::sample::{parse_csv_date, ThroughputSample};

/// Required date column.
pub const COL_DATE: &str = "Date";
/// Required rolling z-score of mean throughput.
pub const COL_Z_THROUGHPUT: &str = "z90MeanThroughputMbps";
/// Optional rolling z-score of loss rate.
pub const COL_Z_LOSS_RATE: &str = "z90LossRate";
/// Optional raw mean throughput in Mbps.
pub const COL_THROUGHPUT: &str = "meanThroughputMbps";

/// Parse a rolling z-score CSV into ordered samples.
///
/// Emits samples in file order, so a chronologically sorted file yields
/// non-decreasing timestamps. Bad rows are dropped silently (debug-level
/// trace only).
pub fn parse_rolling_zscore<R: Read>(reader: R) -> DataResult<Vec<ThroughputSample>> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let date_idx = column_index(&headers, COL_DATE)
        .ok_or_else(|| DataError::Configuration(format!("missing '{}' column", COL_DATE)))?;
    let z_idx = column_index(&headers, COL_Z_THROUGHPUT).ok_or_else(|| {
        DataError::Configuration(format!("missing '{}' column", COL_Z_THROUGHPUT))
    })?;
    let z_loss_idx = column_index(&headers, COL_Z_LOSS_RATE);
    let throughput_idx = column_index(&headers, COL_THROUGHPUT);

    let mut samples = Vec::new();
    for record in csv_reader.records() {
        let record = record?;

        let raw_date = record.get(date_idx).unwrap_or("");
        let Some(date) = parse_csv_date(raw_date) else {
            tracing::debug!(row = ?record, "dropping row without a usable date");
            continue;
        };

        let Some(z_score) = record.get(z_idx).and_then(parse_numeric) else {
            tracing::debug!(date = raw_date, "dropping row without a numeric z-score");
            continue;
        };

        let z_loss_rate = z_loss_idx.and_then(|i| record.get(i)).and_then(parse_numeric);
        let throughput = throughput_idx
            .and_then(|i| record.get(i))
            .and_then(parse_numeric);

        samples.push(ThroughputSample::new(
            date,
            raw_date,
            throughput,
            Some(z_score),
            z_loss_rate,
        ));
    }

    Ok(samples)
}

fn column_index(headers: &::csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Standard float parsing; empty or non-numeric values yield `None`.
fn parse_numeric(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
