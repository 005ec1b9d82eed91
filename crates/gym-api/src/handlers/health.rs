//! Health check handlers.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gym_detector::PoseDetector;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub detector: String,
    pub sessions: String,
}

/// Readiness check endpoint (readiness probe).
///
/// The session store is in-process and the detector is configured at
/// startup, so readiness reports which frame source is active rather than
/// probing a remote dependency per request.
pub async fn ready(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let detector = match state.detector.as_ref() {
        PoseDetector::Http(_) => "http",
        PoseDetector::Mock(_) => "mock",
    };

    Json(ReadinessResponse {
        status: "ready".to_string(),
        detector: detector.to_string(),
        sessions: "ok".to_string(),
    })
}
