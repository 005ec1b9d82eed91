//! Frame-source collaborators for the scoring pipeline.
//!
//! The scoring engine consumes an ordered frame sequence and does not care
//! where it came from. This crate provides the two interchangeable sources:
//! - [`HttpPoseDetector`]: the hosted pose-detection service
//! - [`MockPoseDetector`]: a deterministic synthetic generator
//!
//! [`PoseDetector`] selects between them at startup (env-driven), so no
//! caller depends on which implementation supplies the frames.

pub mod error;
pub mod http;
pub mod mock;

pub use error::{DetectorError, DetectorResult};
pub use http::{HttpPoseDetector, DEFAULT_SAMPLE_RATE_HZ};
pub use mock::MockPoseDetector;

use gym_models::Frame;
use tracing::info;

/// The configured frame source.
#[derive(Debug, Clone)]
pub enum PoseDetector {
    Http(HttpPoseDetector),
    Mock(MockPoseDetector),
}

impl PoseDetector {
    /// Build from the environment: `DETECTOR_URL` selects the hosted
    /// service, otherwise the mock generator is used.
    pub fn from_env() -> DetectorResult<Self> {
        match std::env::var("DETECTOR_URL") {
            Ok(url) if !url.is_empty() => {
                info!(url = %url, "using hosted pose detector");
                Ok(Self::Http(HttpPoseDetector::new(url)?))
            }
            _ => {
                info!("DETECTOR_URL not set, using mock pose detector");
                Ok(Self::Mock(MockPoseDetector::new()))
            }
        }
    }

    /// Extract the landmark frame sequence for a media URL.
    pub async fn detect(&self, media_url: &str) -> DetectorResult<Vec<Frame>> {
        match self {
            Self::Http(detector) => detector.detect(media_url).await,
            Self::Mock(generator) => Ok(generator.detect(media_url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_variant_detects() {
        let detector = PoseDetector::Mock(MockPoseDetector::with_frame_count(5));
        let frames = detector.detect("demo://clip").await.unwrap();
        assert_eq!(frames.len(), 5);
    }
}
