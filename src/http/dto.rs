//! Data Transfer Objects for the HTTP API.
//!
//! View-model DTOs live next to their services and are re-exported from
//! [`crate::api`]; this module holds the request/response types specific
//! to the HTTP surface.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::ooni::{CountryEntry, MeasurementQuery, MAX_LIMIT};
use crate::services::{CityRow, SortDirection, SortKey, SortState};

/// Query parameters for the measurements proxy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeasurementsParams {
    /// Filter by test name (e.g. web_connectivity)
    #[serde(default)]
    pub test_name: Option<String>,
    /// Filter by two-letter country code
    #[serde(default)]
    pub probe_cc: Option<String>,
    /// Start date, YYYY-MM-DD
    #[serde(default)]
    pub since: Option<String>,
    /// End date, YYYY-MM-DD
    #[serde(default)]
    pub until: Option<String>,
    /// Number of results, 1..=1000 (default 100)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Pagination offset (default 0)
    #[serde(default)]
    pub offset: Option<u32>,
}

impl MeasurementsParams {
    /// Validate and convert to an upstream query.
    ///
    /// All rejections happen here, before any outbound call is made.
    pub fn validate(self) -> Result<MeasurementQuery, AppError> {
        let limit = self.limit.unwrap_or(100);
        if limit < 1 || limit > MAX_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            )));
        }

        if let Some(ref cc) = self.probe_cc {
            if cc.len() != 2 || !cc.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(AppError::BadRequest(format!(
                    "probe_cc must be a two-letter country code, got '{}'",
                    cc
                )));
            }
        }

        for (name, value) in [("since", &self.since), ("until", &self.until)] {
            if let Some(raw) = value {
                if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
                    return Err(AppError::BadRequest(format!(
                        "{} must be a YYYY-MM-DD date, got '{}'",
                        name, raw
                    )));
                }
            }
        }

        Ok(MeasurementQuery {
            test_name: self.test_name,
            probe_cc: self.probe_cc,
            since: self.since,
            until: self.until,
            limit,
            offset: self.offset.unwrap_or(0),
        })
    }
}

/// Query parameters for the city table endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CitiesParams {
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl CitiesParams {
    pub fn sort_state(&self) -> SortState {
        SortState::new(
            self.sort.unwrap_or_default(),
            self.direction.unwrap_or_default(),
        )
    }
}

/// Response for the city table endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityRow>,
    pub total: usize,
    pub sort: SortState,
}

/// Response for the tests listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestsResponse {
    pub tests: Vec<String>,
}

/// Response for the countries listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountryEntry>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// ISO timestamp of the check
    pub timestamp: String,
}

/// Root endpoint service metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}
