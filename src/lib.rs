//! # Netpulse Backend
//!
//! Backend service for the network-outage dashboard.
//!
//! This crate provides the Rust backend behind the outage/throughput
//! visualization frontend. It proxies the OONI measurement API, serves
//! per-city rolling z-score CSV time series, and computes the chart and
//! table view models the frontend renders directly.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated DTO types for API responses
//! - [`models`]: City reference data and throughput sample types
//! - [`data`]: CSV time-series store, parser, and fallback loader
//! - [`ooni`]: Upstream OONI API client (reqwest)
//! - [`services`]: Anomaly-region detection, chart series, table sorting
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Data flow
//!
//! ```text
//! browser ── /api/v1/measurements ──► ooni::OoniClient ──► api.ooni.io
//!         ── /api/v1/cities/... ────► data::SeriesLoader ──► CSV files
//!                                     services::{anomaly, series, table}
//!         ── /data/*.csv ───────────► static assets (ServeDir)
//! ```
//!
//! All derived data (sorted rows, anomaly regions, chart series) is
//! recomputed from the latest loaded snapshot on every request; nothing
//! is persisted by this service.

pub mod api;
pub mod config;
pub mod data;
pub mod models;
pub mod ooni;
pub mod services;

pub mod http;
