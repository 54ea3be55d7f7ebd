//! Series store abstraction and the filesystem implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::data::csv::parse_rolling_zscore;
use crate::data::error::{DataError, DataResult};
use crate::models::ThroughputSample;

/// Abstract source of per-city time series.
///
/// Implementations return the parsed samples for one city, or
/// [`DataError::NotFound`] when no series exists for that slug. The
/// fallback policy lives in the loader, not here.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Fetch and parse the series for one city slug.
    async fn fetch_series(&self, city_id: &str) -> DataResult<Vec<ThroughputSample>>;
}

/// Filesystem store reading `{id}_rolling_zscore.csv` from a data directory.
///
/// The same directory is exposed verbatim under `/data` by the HTTP
/// router, so the files this store parses are the files browsers can
/// download.
#[derive(Debug, Clone)]
pub struct FsSeriesStore {
    data_dir: PathBuf,
}

impl FsSeriesStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the CSV backing one city.
    pub fn series_path(&self, city_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}_rolling_zscore.csv", city_id))
    }
}

#[async_trait]
impl SeriesStore for FsSeriesStore {
    async fn fetch_series(&self, city_id: &str) -> DataResult<Vec<ThroughputSample>> {
        let path = self.series_path(city_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataError::NotFound {
                    city_id: city_id.to_string(),
                });
            }
            Err(e) => {
                return Err(DataError::Io {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        parse_rolling_zscore(bytes.as_slice())
    }
}
