//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "gym_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "gym_http_request_duration_seconds";

    // Analysis metrics
    pub const ANALYSES_TOTAL: &str = "gym_analyses_total";
    pub const ANALYSIS_FRAMES_TOTAL: &str = "gym_analysis_frames_total";
    pub const BATCH_ITEMS_TOTAL: &str = "gym_batch_items_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record one completed analysis.
pub fn record_analysis(frame_count: usize, source: &'static str) {
    let labels = [("source", source.to_string())];
    counter!(names::ANALYSES_TOTAL, &labels).increment(1);
    counter!(names::ANALYSIS_FRAMES_TOTAL, &labels).increment(frame_count as u64);
}

/// Record a finished batch item.
pub fn record_batch_item(outcome: &'static str) {
    let labels = [("outcome", outcome.to_string())];
    counter!(names::BATCH_ITEMS_TOTAL, &labels).increment(1);
}

/// Collapse ID path segments so metric cardinality stays bounded.
fn sanitize_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            let looks_like_id = segment.len() >= 16
                || (!segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()));
            if looks_like_id {
                ":id"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Axum middleware recording request count and latency.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path_collapses_ids() {
        assert_eq!(
            sanitize_path("/api/sessions/550e8400-e29b-41d4-a716-446655440000"),
            "/api/sessions/:id"
        );
        assert_eq!(sanitize_path("/health"), "/health");
    }
}
