//! Axum HTTP API for the GymScore backend.
//!
//! Wires the scoring engine, the frame-source collaborator and the session
//! store behind a small JSON API: single and batch analysis, batch progress
//! polling, session history with CSV export, health probes and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
