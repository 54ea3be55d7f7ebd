//! Synthetic placeholder series.
//!
//! Last-resort data source so the chart always has something to render
//! when both the per-city CSV and the default city's CSV are missing.

use chrono::{Duration, NaiveTime, Utc};

use crate::models::ThroughputSample;

/// Number of daily samples in a placeholder series.
pub const PLACEHOLDER_DAYS: i64 = 90;

/// Generate a deterministic placeholder series covering the most recent
/// [`PLACEHOLDER_DAYS`] days, one sample per day, ending yesterday.
///
/// Values are a gentle sinusoid with all z-scores inside the anomaly
/// threshold, so synthetic data never paints fake outages.
pub fn placeholder_series() -> Vec<ThroughputSample> {
    let today = Utc::now().date_naive();

    (0..PLACEHOLDER_DAYS)
        .map(|i| {
            let day = today - Duration::days(PLACEHOLDER_DAYS - i);
            let phase = i as f64 / 7.0;
            let z = 0.8 * phase.sin();
            let throughput = 45.0 + 5.0 * phase.cos();
            let raw = day.format("%Y-%m-%d").to_string();

            ThroughputSample::new(
                day.and_time(NaiveTime::MIN),
                &raw,
                Some(throughput),
                Some(z),
                Some(-z * 0.5),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::anomaly::throughput_anomalous;

    #[test]
    fn test_placeholder_covers_fixed_window() {
        let samples = placeholder_series();
        assert_eq!(samples.len(), PLACEHOLDER_DAYS as usize);
        assert!(samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_placeholder_has_no_anomalies() {
        assert!(placeholder_series()
            .iter()
            .all(|s| !throughput_anomalous(s.z_score)));
    }
}
