//! HTTP client for the hosted pose-detection service.
//!
//! The service consumes media by URL and returns per-frame named keypoints
//! with normalized positions and confidences. Landmark extraction itself is
//! a black box; this client only owns the wire call.

use std::time::Duration;

use gym_models::Frame;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DetectorError, DetectorResult};

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Detection sample rate requested from the service.
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 15;

#[derive(Serialize)]
struct DetectRequest<'a> {
    media_url: &'a str,
    sample_rate_hz: u32,
}

#[derive(Deserialize)]
struct DetectResponse {
    frames: Vec<Frame>,
}

/// Client for the pose-detection service.
#[derive(Debug, Clone)]
pub struct HttpPoseDetector {
    client: reqwest::Client,
    base_url: String,
    sample_rate_hz: u32,
}

impl HttpPoseDetector {
    /// Create a client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> DetectorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        })
    }

    /// Override the requested sample rate.
    pub fn with_sample_rate(mut self, hz: u32) -> Self {
        self.sample_rate_hz = hz;
        self
    }

    /// Run detection on a media URL, returning the ordered frame sequence.
    pub async fn detect(&self, media_url: &str) -> DetectorResult<Vec<Frame>> {
        if media_url.is_empty() {
            return Err(DetectorError::InvalidUrl("empty media URL".to_string()));
        }

        let url = format!("{}/v1/detect", self.base_url);
        let request = DetectRequest {
            media_url,
            sample_rate_hz: self.sample_rate_hz,
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "detection service error");
            return Err(DetectorError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: DetectResponse = serde_json::from_str(&body)?;

        debug!(
            frames = parsed.frames.len(),
            sample_rate_hz = self.sample_rate_hz,
            "detection completed"
        );

        Ok(parsed.frames)
    }
}
