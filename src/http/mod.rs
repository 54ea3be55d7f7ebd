//! HTTP server module.
//!
//! Axum-based REST API exposing the OONI proxy endpoints, the city
//! view-model endpoints, and the static CSV assets.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Parameter validation before any upstream call         │
//! │  - JSON serialization, CORS, compression, tracing        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                               │
//! │  - Anomaly regions, chart series, table sorting          │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Data Layer (data/) + Upstream client (ooni/)            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
