//! Fallback-chain tests for the series loader.

use std::path::Path;
use std::sync::Arc;

use netpulse::data::{FsSeriesStore, SeriesLoader, SeriesOrigin};
use netpulse::models::DEFAULT_CITY_ID;

const CSV_HEADER: &str = "Date,z90MeanThroughputMbps,z90LossRate\n";

fn loader_for(dir: &Path) -> SeriesLoader {
    SeriesLoader::new(Arc::new(FsSeriesStore::new(dir)))
}

fn write_series(dir: &Path, city_id: &str, rows: &str) {
    std::fs::write(
        dir.join(format!("{}_rolling_zscore.csv", city_id)),
        format!("{}{}", CSV_HEADER, rows),
    )
    .unwrap();
}

#[tokio::test]
async fn test_city_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    write_series(dir.path(), "paris", "2024-01-05,0.5,0.0\n");
    write_series(dir.path(), DEFAULT_CITY_ID, "2024-01-05,0.9,0.0\n");

    let (samples, origin) = loader_for(dir.path()).load("paris").await;
    assert_eq!(origin, SeriesOrigin::City);
    assert_eq!(samples[0].z_score, Some(0.5));
}

#[tokio::test]
async fn test_missing_city_falls_back_to_default_without_error() {
    let dir = tempfile::tempdir().unwrap();
    write_series(dir.path(), DEFAULT_CITY_ID, "2024-01-05,0.9,0.0\n");

    let (samples, origin) = loader_for(dir.path()).load("paris").await;
    assert_eq!(origin, SeriesOrigin::DefaultFallback);
    assert_eq!(samples[0].z_score, Some(0.9));
}

#[tokio::test]
async fn test_empty_directory_yields_synthetic() {
    let dir = tempfile::tempdir().unwrap();

    let (samples, origin) = loader_for(dir.path()).load("paris").await;
    assert_eq!(origin, SeriesOrigin::Synthetic);
    assert!(!samples.is_empty());
}

#[tokio::test]
async fn test_default_city_itself_goes_straight_to_synthetic() {
    let dir = tempfile::tempdir().unwrap();

    let (_, origin) = loader_for(dir.path()).load(DEFAULT_CITY_ID).await;
    assert_eq!(origin, SeriesOrigin::Synthetic);
}

#[tokio::test]
async fn test_unreadable_city_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    // City file exists but has no usable header; default city is fine.
    std::fs::write(dir.path().join("paris_rolling_zscore.csv"), "garbage\n").unwrap();
    write_series(dir.path(), DEFAULT_CITY_ID, "2024-01-05,0.9,0.0\n");

    let (_, origin) = loader_for(dir.path()).load("paris").await;
    assert_eq!(origin, SeriesOrigin::DefaultFallback);
}
