//! API routes.

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::analyze::analyze;
use crate::handlers::batch::{get_batch, start_batch};
use crate::handlers::health::{health, ready};
use crate::handlers::sessions::{
    delete_session, export_sessions_csv, get_session, list_sessions,
};
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let api_routes = Router::new()
        // Single-media analysis
        .route("/analyze", post(analyze))
        // Batch analysis
        .route("/batch", post(start_batch))
        .route("/batch/:batch_id", get(get_batch))
        // Session history
        .route("/sessions", get(list_sessions))
        .route("/sessions/export.csv", get(export_sessions_csv))
        .route("/sessions/:session_id", get(get_session))
        .route("/sessions/:session_id", delete(delete_session));

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .nest("/api", api_routes);

    if let Some(handle) = metrics_handle {
        app = app.route("/metrics", get(move || async move { handle.render() }));
    }

    app.layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_logging))
        .layer(middleware::from_fn(request_id))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .with_state(state)
}
