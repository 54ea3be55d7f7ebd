//! Router-level integration tests.
//!
//! Each test builds the full axum router against a temporary data
//! directory and drives it with `tower::ServiceExt::oneshot`. The OONI
//! client points at an unroutable address, so any test reaching upstream
//! would surface as a 502 rather than hanging.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use netpulse::data::FsSeriesStore;
use netpulse::http::{create_router, AppState};
use netpulse::ooni::OoniClient;

const CSV_HEADER: &str = "Date,z90MeanThroughputMbps,z90LossRate\n";

fn test_app(data_dir: &Path) -> Router {
    let store = Arc::new(FsSeriesStore::new(data_dir));
    let ooni = Arc::new(OoniClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap());
    create_router(AppState::new(store, ooni), data_dir)
}

fn write_series(dir: &Path, city_id: &str, rows: &str) {
    std::fs::write(
        dir.join(format!("{}_rolling_zscore.csv", city_id)),
        format!("{}{}", CSV_HEADER, rows),
    )
    .unwrap();
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["measurements"], "/api/v1/measurements");
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn test_measurements_limit_out_of_range_rejected_before_upstream() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(
        test_app(dir.path()),
        "/api/v1/measurements?limit=5000",
    )
    .await;

    // 400 from validation, not 502 from the (unroutable) upstream.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_measurements_bad_date_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _) = get_json(
        test_app(dir.path()),
        "/api/v1/measurements?since=05-01-2024",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_measurements_upstream_failure_is_bad_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/api/v1/measurements?limit=10").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_tests_listing_is_static() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/api/v1/tests").await;

    assert_eq!(status, StatusCode::OK);
    let tests = body["tests"].as_array().unwrap();
    assert!(tests.iter().any(|t| t == "web_connectivity"));
}

#[tokio::test]
async fn test_countries_fall_back_to_static_list() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/api/v1/countries").await;

    // Upstream is unreachable, so the static fallback list is served.
    assert_eq!(status, StatusCode::OK);
    let countries = body["countries"].as_array().unwrap();
    assert!(countries.iter().any(|c| c["code"] == "US"));
}

#[tokio::test]
async fn test_cities_default_sort_is_name_ascending() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/api/v1/cities").await;

    assert_eq!(status, StatusCode::OK);
    let cities = body["cities"].as_array().unwrap();
    assert_eq!(cities.first().unwrap()["name"], "Jakarta");
    assert_eq!(cities.last().unwrap()["name"], "Tokyo");
    assert_eq!(body["total"], cities.len() as i64);
}

#[tokio::test]
async fn test_cities_descending_direction() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = get_json(
        test_app(dir.path()),
        "/api/v1/cities?sort=name&direction=descending",
    )
    .await;

    let cities = body["cities"].as_array().unwrap();
    assert_eq!(cities.first().unwrap()["name"], "Tokyo");
}

#[tokio::test]
async fn test_cities_last_outage_from_own_series() {
    let dir = tempfile::tempdir().unwrap();
    // Paris has one anomalous sample; no other city has a series.
    write_series(dir.path(), "paris", "2024-01-05,2.4,0.0\n2024-01-06,0.1,0.0\n");

    let (_, body) = get_json(test_app(dir.path()), "/api/v1/cities").await;
    let cities = body["cities"].as_array().unwrap();

    let paris = cities.iter().find(|c| c["id"] == "paris").unwrap();
    assert!(paris["last_outage"].is_i64());
    let tokyo = cities.iter().find(|c| c["id"] == "tokyo").unwrap();
    assert!(tokyo["last_outage"].is_null());
}

#[tokio::test]
async fn test_series_for_city_with_data() {
    let dir = tempfile::tempdir().unwrap();
    write_series(
        dir.path(),
        "paris",
        "2024-01-01,0.0,0.0\n2024-01-02,2.0,0.1\n2024-01-03,2.0,0.1\n2024-01-04,-2.0,0.2\n2024-01-05,0.0,0.0\n",
    );

    let (status, body) = get_json(test_app(dir.path()), "/api/v1/cities/paris/series").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city_id"], "paris");
    assert_eq!(body["origin"], "city");
    assert_eq!(body["threshold_upper"], 1.5);
    assert_eq!(
        body["anomaly_regions"],
        serde_json::json!([{"start": 1, "end": 2}, {"start": 3, "end": 3}])
    );
}

#[tokio::test]
async fn test_series_falls_back_to_default_city() {
    let dir = tempfile::tempdir().unwrap();
    // Only the default city (tokyo) has a file.
    write_series(dir.path(), "tokyo", "2024-01-05,0.3,0.0\n");

    let (status, body) = get_json(test_app(dir.path()), "/api/v1/cities/paris/series").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"], "default_fallback");
    assert_eq!(body["samples"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_series_synthetic_when_no_files_exist() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/api/v1/cities/paris/series").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"], "synthetic");
    assert!(!body["samples"].as_array().unwrap().is_empty());
    // Synthetic data never paints fake outages.
    assert!(body["anomaly_regions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_series_unknown_city_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(test_app(dir.path()), "/api/v1/cities/atlantis/series").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_static_csv_served_under_data() {
    let dir = tempfile::tempdir().unwrap();
    write_series(dir.path(), "paris", "2024-01-05,0.3,0.0\n");

    let app = test_app(dir.path());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/data/paris_rolling_zscore.csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("Date,"));
}
