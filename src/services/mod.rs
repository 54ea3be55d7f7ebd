//! Service layer: view-model computation for the dashboard frontend.
//!
//! Services sit between the data layer and the HTTP handlers. Each
//! function is a pure derivation from the latest loaded snapshot; nothing
//! here holds state across requests.

pub mod anomaly;
pub mod series;
pub mod table;

pub use anomaly::{detect_regions, AnomalyKind, Region, Z_SCORE_THRESHOLD};
pub use series::{build_series_data, SeriesData};
pub use table::{sort_rows, CityRow, SortDirection, SortKey, SortState};
