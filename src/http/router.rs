//! Router configuration for the HTTP API.
//!
//! Sets up all routes, middleware (CORS, compression, tracing), the
//! static CSV asset directory, and creates the axum router ready for
//! serving.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// `data_dir` is exposed verbatim under `/data` so browsers can fetch
/// the raw `{id}_rolling_zscore.csv` files.
pub fn create_router(state: AppState, data_dir: impl AsRef<Path>) -> Router {
    // Permissive CORS for browser consumption of the proxy.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/measurements", get(handlers::get_measurements))
        .route("/tests", get(handlers::get_tests))
        .route("/countries", get(handlers::get_countries))
        .route("/cities", get(handlers::list_cities))
        .route("/cities/{city_id}/series", get(handlers::get_city_series));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_v1)
        .nest_service("/data", ServeDir::new(data_dir.as_ref()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
