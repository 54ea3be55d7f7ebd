//! Client for the OONI measurement REST API.
//!
//! A thin pass-through: responses are relayed as `serde_json::Value`
//! without transformation. No retries, no caching.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default OONI API host.
pub const DEFAULT_BASE_URL: &str = "https://api.ooni.io";

/// Hard cap on the `limit` parameter accepted by the upstream API.
pub const MAX_LIMIT: u32 = 1000;

/// Number of distinct country codes returned by [`OoniClient::get_countries`].
const MAX_COUNTRIES: usize = 50;

/// Error type for upstream OONI calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("HTTP error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Filters for a measurements query, forwarded verbatim as query
/// parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementQuery {
    pub test_name: Option<String>,
    pub probe_cc: Option<String>,
    /// Start date, YYYY-MM-DD
    pub since: Option<String>,
    /// End date, YYYY-MM-DD
    pub until: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl MeasurementQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.min(MAX_LIMIT).to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(ref test_name) = self.test_name {
            params.push(("test_name", test_name.clone()));
        }
        if let Some(ref probe_cc) = self.probe_cc {
            params.push(("probe_cc", probe_cc.clone()));
        }
        if let Some(ref since) = self.since {
            params.push(("since", since.clone()));
        }
        if let Some(ref until) = self.until {
            params.push(("until", until.clone()));
        }
        params
    }
}

/// Client for the OONI API.
#[derive(Debug, Clone)]
pub struct OoniClient {
    client: reqwest::Client,
    api_base: String,
}

impl OoniClient {
    /// Build a client against a base URL (host only, no `/api/v1`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: format!("{}/api/v1", base_url.trim_end_matches('/')),
        })
    }

    /// Fetch measurements matching the given filters; the upstream JSON
    /// is returned unmodified.
    pub async fn get_measurements(&self, query: &MeasurementQuery) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/measurements", self.api_base))
            .query(&query.to_params())
            .send()
            .await?;
        Self::json_or_status(response).await
    }

    /// Fetch one measurement by ID, pass-through.
    pub async fn get_measurement_details(&self, id: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/measurements/{}", self.api_base, id))
            .send()
            .await?;
        Self::json_or_status(response).await
    }

    /// List of well-known OONI test names.
    ///
    /// The upstream API has no dedicated endpoint for this, so the list
    /// is static.
    pub fn get_test_names(&self) -> Vec<&'static str> {
        WELL_KNOWN_TESTS.to_vec()
    }

    /// Countries with recent measurements.
    ///
    /// Samples one page of measurements and extracts distinct `probe_cc`
    /// values; falls back to a static list when the upstream is
    /// unreachable or the sample yields nothing.
    pub async fn get_countries(&self) -> Vec<CountryEntry> {
        let sampled = self.sample_probe_countries().await;
        match sampled {
            Ok(countries) if !countries.is_empty() => countries,
            _ => FALLBACK_COUNTRIES
                .iter()
                .map(|(code, name)| CountryEntry {
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    async fn sample_probe_countries(&self) -> Result<Vec<CountryEntry>, UpstreamError> {
        let query = MeasurementQuery {
            limit: 100,
            ..Default::default()
        };
        let data = self.get_measurements(&query).await?;

        let mut codes: Vec<String> = data
            .get("results")
            .and_then(Value::as_array)
            .map(|results| {
                results
                    .iter()
                    .filter_map(|m| m.get("probe_cc").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        codes.sort();
        codes.dedup();

        Ok(codes
            .into_iter()
            .take(MAX_COUNTRIES)
            .map(|code| CountryEntry {
                name: code.clone(),
                code,
            })
            .collect())
    }

    async fn json_or_status(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

/// One entry of the countries listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}

static WELL_KNOWN_TESTS: &[&str] = &[
    "web_connectivity",
    "http_requests",
    "dns_consistency",
    "http_invalid_request_line",
    "bridge_reachability",
    "tcp_connect",
    "http_header_field_manipulation",
    "http_host",
    "multi_protocol_traceroute",
    "meek_fronted_requests_test",
    "whatsapp",
    "facebook_messenger",
    "telegram",
    "vanilla_tor",
    "stunreachability",
];

static FALLBACK_COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("CN", "China"),
    ("RU", "Russia"),
    ("IR", "Iran"),
    ("IN", "India"),
    ("BR", "Brazil"),
    ("JP", "Japan"),
];
