//! Upstream OONI measurement API client.

pub mod client;

pub use client::{CountryEntry, MeasurementQuery, OoniClient, UpstreamError, MAX_LIMIT};
