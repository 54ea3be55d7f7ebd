//! Error types for time-series data access.

/// Result type for data-access operations.
pub type DataResult<T> = Result<T, DataError>;

/// Error type for time-series store and parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// No series file exists for the requested city.
    #[error("Series not found for city '{city_id}'")]
    NotFound { city_id: String },

    /// Filesystem-level failure while reading a series file.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV could not be read at all (header failure, broken stream).
    /// Individual bad rows never produce this; they are dropped.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Invalid loader or store configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DataError {
    /// True when the error means "the file is simply not there", which the
    /// loader treats as a fallback trigger rather than a failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            DataError::NotFound { .. } => true,
            DataError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
