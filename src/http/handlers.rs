//! HTTP handlers for the REST API.
//!
//! Each handler validates its parameters, then delegates to the upstream
//! client, the data layer, or the service layer.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde_json::Value;

use super::dto::{
    CitiesParams, CitiesResponse, CountriesResponse, HealthResponse, MeasurementsParams,
    RootResponse, TestsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{cities, city_by_id};
use crate::services::series::{build_series_data, last_anomaly_timestamp, SeriesData};
use crate::services::table::{sort_rows, CityRow};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Service Metadata
// =============================================================================

/// GET /
///
/// Service metadata and endpoint map.
pub async fn root() -> Json<RootResponse> {
    let endpoints = BTreeMap::from(
        [
            ("measurements", "/api/v1/measurements"),
            ("tests", "/api/v1/tests"),
            ("countries", "/api/v1/countries"),
            ("cities", "/api/v1/cities"),
            ("series", "/api/v1/cities/{city_id}/series"),
            ("data", "/data"),
            ("health", "/health"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string())),
    );

    Json(RootResponse {
        message: "Netpulse Outage Dashboard API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// GET /health
///
/// Liveness check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

// =============================================================================
// OONI Proxy
// =============================================================================

/// GET /api/v1/measurements
///
/// Validate filters, forward them to the OONI API, and relay the JSON
/// response unmodified. Invalid parameters are rejected before any
/// outbound call.
pub async fn get_measurements(
    State(state): State<AppState>,
    Query(params): Query<MeasurementsParams>,
) -> HandlerResult<Value> {
    let query = params.validate()?;
    let data = state.ooni.get_measurements(&query).await?;
    Ok(Json(data))
}

/// GET /api/v1/tests
///
/// List available OONI test names.
pub async fn get_tests(State(state): State<AppState>) -> HandlerResult<TestsResponse> {
    let tests = state
        .ooni
        .get_test_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(Json(TestsResponse { tests }))
}

/// GET /api/v1/countries
///
/// List countries with available measurements.
pub async fn get_countries(State(state): State<AppState>) -> HandlerResult<CountriesResponse> {
    let countries = state.ooni.get_countries().await;
    Ok(Json(CountriesResponse { countries }))
}

// =============================================================================
// City View Models
// =============================================================================

/// GET /api/v1/cities
///
/// Sorted city-table rows. The last-outage column comes from each city's
/// own series; a city without a readable series simply has no outage.
pub async fn list_cities(
    State(state): State<AppState>,
    Query(params): Query<CitiesParams>,
) -> HandlerResult<CitiesResponse> {
    let mut rows = Vec::with_capacity(cities().len());
    for city in cities() {
        let last_outage = match state.store.fetch_series(city.id).await {
            Ok(samples) => last_anomaly_timestamp(&samples),
            Err(_) => None,
        };
        rows.push(CityRow::from_city(city, last_outage));
    }

    let sort = params.sort_state();
    sort_rows(&mut rows, sort);
    let total = rows.len();

    Ok(Json(CitiesResponse {
        cities: rows,
        total,
        sort,
    }))
}

/// GET /api/v1/cities/{city_id}/series
///
/// Chart view model for one city: samples, anomaly regions, and the
/// z-score reference lines. Never fails for a known city; the loader's
/// fallback chain guarantees data.
pub async fn get_city_series(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> HandlerResult<SeriesData> {
    let city = city_by_id(&city_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown city '{}'", city_id)))?;

    let (samples, origin) = state.loader.load(city.id).await;
    Ok(Json(build_series_data(city.id, samples, origin)))
}
