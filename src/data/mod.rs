//! CSV time-series loading.
//!
//! This module owns everything between the filesystem and the service
//! layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (series/table view models)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  SeriesLoader (loader.rs) - fallback orchestration      │
//! │  requested city → default city → synthetic series       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  SeriesStore trait (store.rs) - abstract source         │
//! │  FsSeriesStore reads {id}_rolling_zscore.csv            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The parser (`csv.rs`) is shared by every store implementation.

pub mod csv;
pub mod error;
pub mod loader;
pub mod store;
pub mod synthetic;

pub use error::{DataError, DataResult};
pub use loader::{SeriesLoader, SeriesOrigin};
pub use store::{FsSeriesStore, SeriesStore};
