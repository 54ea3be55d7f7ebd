//! Public API surface for the backend.
//!
//! Consolidates the DTO types serialized on the HTTP API.

pub use crate::data::loader::SeriesOrigin;
pub use crate::models::city::City;
pub use crate::models::sample::ThroughputSample;
pub use crate::ooni::client::{CountryEntry, MeasurementQuery};
pub use crate::services::anomaly::Region;
pub use crate::services::series::SeriesData;
pub use crate::services::table::{CityRow, SortDirection, SortKey, SortState};
