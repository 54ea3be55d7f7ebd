//! Fallback-chain loader sitting on top of a [`SeriesStore`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::store::SeriesStore;
use crate::data::synthetic::placeholder_series;
use crate::models::{ThroughputSample, DEFAULT_CITY_ID};

/// Which source actually produced a loaded series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrigin {
    /// The requested city's own CSV
    City,
    /// The default city's CSV, used because the requested one was missing
    DefaultFallback,
    /// Generated placeholder data; no CSV was readable at all
    Synthetic,
}

/// Loads a city's series with the dashboard's fallback policy:
/// requested city, then the default city, then synthetic placeholder
/// data. Never fails; the chart always has data to render.
#[derive(Clone)]
pub struct SeriesLoader {
    store: Arc<dyn SeriesStore>,
}

impl SeriesLoader {
    pub fn new(store: Arc<dyn SeriesStore>) -> Self {
        Self { store }
    }

    /// Load the series for a city, falling back as needed.
    ///
    /// Any store failure triggers the next fallback step; a missing
    /// per-city file is expected and logged at debug level only.
    pub async fn load(&self, city_id: &str) -> (Vec<ThroughputSample>, SeriesOrigin) {
        match self.store.fetch_series(city_id).await {
            Ok(samples) => return (samples, SeriesOrigin::City),
            Err(e) if e.is_not_found() => {
                tracing::debug!(city_id, "no per-city series, falling back to default city");
            }
            Err(e) => {
                tracing::warn!(city_id, error = %e, "series load failed, falling back");
            }
        }

        if city_id != DEFAULT_CITY_ID {
            match self.store.fetch_series(DEFAULT_CITY_ID).await {
                Ok(samples) => return (samples, SeriesOrigin::DefaultFallback),
                Err(e) => {
                    tracing::warn!(error = %e, "default city series unavailable");
                }
            }
        }

        (placeholder_series(), SeriesOrigin::Synthetic)
    }
}
