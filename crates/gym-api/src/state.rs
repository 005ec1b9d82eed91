//! Application state.

use std::sync::Arc;

use gym_detector::PoseDetector;
use gym_sessions::SessionStore;

use crate::config::ApiConfig;
use crate::services::BatchRunner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub detector: Arc<PoseDetector>,
    pub sessions: SessionStore,
    pub batches: BatchRunner,
}

impl AppState {
    /// Create application state with the env-selected detector.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let detector = PoseDetector::from_env()?;
        Ok(Self::with_detector(config, detector))
    }

    /// Create application state with an explicit detector (used by tests).
    pub fn with_detector(config: ApiConfig, detector: PoseDetector) -> Self {
        Self {
            config,
            detector: Arc::new(detector),
            sessions: SessionStore::new(),
            batches: BatchRunner::new(),
        }
    }
}
