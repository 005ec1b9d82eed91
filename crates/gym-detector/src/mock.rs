//! Deterministic synthetic frame source for demos and tests.
//!
//! Generates a plausible standing routine: vertical left-side chain with a
//! small horizontal wobble on the knee. Deterministic by construction (the
//! jitter derives from the frame index, not a global RNG), so repeated runs
//! and parallel analyses agree exactly.

use gym_models::{Frame, Landmark};

use crate::http::DEFAULT_SAMPLE_RATE_HZ;

/// Default clip length: two seconds at the detection rate.
const DEFAULT_FRAME_COUNT: u32 = 2 * DEFAULT_SAMPLE_RATE_HZ;

/// Synthetic pose generator standing in for the detection service.
#[derive(Debug, Clone)]
pub struct MockPoseDetector {
    frame_count: u32,
}

impl Default for MockPoseDetector {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }
}

impl MockPoseDetector {
    /// Generator with the default two-second clip length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with an explicit frame count.
    pub fn with_frame_count(frame_count: u32) -> Self {
        Self { frame_count }
    }

    /// Nominal clip duration implied by the frame count.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / DEFAULT_SAMPLE_RATE_HZ as f64
    }

    /// Produce the synthetic frame sequence. The media URL is ignored; it
    /// exists so the mock is call-compatible with the real detector.
    pub fn detect(&self, _media_url: &str) -> Vec<Frame> {
        (0..self.frame_count)
            .map(|i| {
                // Knee wobble in [-0.05, 0.05), varying per frame
                let jitter = (hash01(i) - 0.5) * 0.1;
                Frame::new(vec![
                    Landmark::new("left_shoulder", 0.5, 0.2, 0.9),
                    Landmark::new("left_hip", 0.5, 0.5, 0.95),
                    Landmark::new("left_knee", 0.5 + jitter, 0.7, 0.9),
                    Landmark::new("left_ankle", 0.5, 0.9, 0.85),
                ])
            })
            .collect()
    }
}

/// Map a frame index to a value in [0, 1), deterministically.
fn hash01(i: u32) -> f64 {
    let mut x = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    (x >> 11) as f64 / (1u64 << 53) as f64
}
