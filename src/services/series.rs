//! Chart view model for a city's throughput series.
//!
//! Assembles everything the frontend chart renders: the ordered samples,
//! the shaded anomaly regions, and the z-score reference lines.

use serde::{Deserialize, Serialize};

use crate::data::SeriesOrigin;
use crate::models::ThroughputSample;
use crate::services::anomaly::{
    classify_throughput, detect_regions, throughput_anomalous, Region, Z_SCORE_THRESHOLD,
};

/// Complete chart view model for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesData {
    /// City slug the data was requested for
    pub city_id: String,
    /// Ordered samples (chronological, as parsed)
    pub samples: Vec<ThroughputSample>,
    /// Shaded anomaly regions over `samples` indices
    pub anomaly_regions: Vec<Region>,
    /// Upper z-score reference line
    pub threshold_upper: f64,
    /// Lower z-score reference line
    pub threshold_lower: f64,
    /// Which source produced the samples
    pub origin: SeriesOrigin,
}

/// Derive the chart view model from a loaded snapshot.
///
/// Pure function of its inputs; recomputed on every request.
pub fn build_series_data(
    city_id: &str,
    samples: Vec<ThroughputSample>,
    origin: SeriesOrigin,
) -> SeriesData {
    let anomaly_regions = detect_regions(&samples, |s| classify_throughput(s.z_score));

    SeriesData {
        city_id: city_id.to_string(),
        samples,
        anomaly_regions,
        threshold_upper: Z_SCORE_THRESHOLD,
        threshold_lower: -Z_SCORE_THRESHOLD,
        origin,
    }
}

/// Timestamp of the latest anomalous sample, if any.
///
/// Feeds the city table's "last outage" column.
pub fn last_anomaly_timestamp(samples: &[ThroughputSample]) -> Option<i64> {
    samples
        .iter()
        .filter(|s| throughput_anomalous(s.z_score))
        .map(|s| s.timestamp)
        .max()
}
