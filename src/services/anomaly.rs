//! Anomaly-region detection over ordered sample sequences.
//!
//! A region is a maximal contiguous run of samples sharing the same
//! anomaly classification (above the band vs. below it). Runs on
//! opposite sides of the band abut without merging, so the chart can
//! shade them separately. Regions are derived freshly per request and
//! never persisted.

use serde::{Deserialize, Serialize};

/// Z-score magnitude beyond which a throughput sample is anomalous.
///
/// Single source of truth for both region shading and the chart's
/// reference lines, so the two can never disagree.
pub const Z_SCORE_THRESHOLD: f64 = 1.5;

/// Availability percentage below which an availability sample is anomalous.
pub const AVAILABILITY_THRESHOLD: f64 = 95.0;

/// Which side of the threshold band an anomalous sample sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Above the upper threshold
    High,
    /// Below the lower threshold
    Low,
}

/// Closed index interval `[start, end]` over a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

/// Throughput-mode classification: anomalous when the z-score lies
/// strictly outside `[-Z_SCORE_THRESHOLD, Z_SCORE_THRESHOLD]`. A missing
/// z-score is never anomalous.
pub fn classify_throughput(z_score: Option<f64>) -> Option<AnomalyKind> {
    match z_score {
        Some(z) if z > Z_SCORE_THRESHOLD => Some(AnomalyKind::High),
        Some(z) if z < -Z_SCORE_THRESHOLD => Some(AnomalyKind::Low),
        _ => None,
    }
}

/// Throughput-mode predicate ignoring the side of the band.
pub fn throughput_anomalous(z_score: Option<f64>) -> bool {
    classify_throughput(z_score).is_some()
}

/// Availability-mode classification: anomalous when availability drops
/// below [`AVAILABILITY_THRESHOLD`] percent. Only one side exists here.
pub fn classify_availability(availability: Option<f64>) -> Option<AnomalyKind> {
    match availability {
        Some(a) if a < AVAILABILITY_THRESHOLD => Some(AnomalyKind::Low),
        _ => None,
    }
}

/// Availability-mode predicate.
pub fn availability_anomalous(availability: Option<f64>) -> bool {
    classify_availability(availability).is_some()
}

/// Detect maximal same-classification anomaly runs in one left-to-right
/// scan.
///
/// Opens a region when the classification becomes `Some`, closes it as
/// `[start, previous]` when the classification goes back to `None` or
/// switches to a different kind (opening the next region at the same
/// index), and closes any region still open at the end of the scan at
/// the last index.
///
/// The output intervals are disjoint and sorted by start index, and
/// together cover exactly the anomalous indices. Two regions abut only
/// where the classification flips sides. Empty input yields an empty
/// list.
pub fn detect_regions<T, K: PartialEq>(
    samples: &[T],
    classify: impl Fn(&T) -> Option<K>,
) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut open: Option<(usize, K)> = None;

    for (i, sample) in samples.iter().enumerate() {
        let kind = classify(sample);

        let changed = match (&open, &kind) {
            (Some((_, current)), Some(next)) => current != next,
            (None, None) => false,
            _ => true,
        };
        if !changed {
            continue;
        }

        if let Some((start, _)) = open.take() {
            regions.push(Region { start, end: i - 1 });
        }
        if let Some(k) = kind {
            open = Some((i, k));
        }
    }

    if let Some((start, _)) = open {
        regions.push(Region {
            start,
            end: samples.len() - 1,
        });
    }

    regions
}

#[cfg(test)]
#[path = "anomaly_tests.rs"]
mod anomaly_tests;
