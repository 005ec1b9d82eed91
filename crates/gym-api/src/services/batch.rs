//! Batch analysis orchestration.
//!
//! Each batch item runs in its own spawned task: detection, scoring and
//! persistence for one media URL. Item state lives in an explicit per-batch
//! status map owned by the runner, and a failed item only marks itself
//! failed; the rest of the batch keeps going.

use std::collections::HashMap;
use std::sync::Arc;

use gym_detector::PoseDetector;
use gym_models::{AnalysisSession, BatchItemState, BatchStatus};
use gym_scoring::analyze_pose;
use gym_sessions::SessionStore;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::metrics;

/// Owns batch status maps and drives item tasks.
#[derive(Clone, Default)]
pub struct BatchRunner {
    batches: Arc<RwLock<HashMap<String, BatchStatus>>>,
}

impl BatchRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a batch for a user. Returns the batch ID immediately; items
    /// are processed concurrently in the background.
    pub async fn start(
        &self,
        detector: Arc<PoseDetector>,
        sessions: SessionStore,
        user_id: &str,
        media_urls: Vec<String>,
    ) -> String {
        let batch = BatchStatus::new(user_id, &media_urls);
        let batch_id = batch.batch_id.clone();

        {
            let mut batches = self.batches.write().await;
            batches.insert(batch_id.clone(), batch);
        }

        info!(batch_id = %batch_id, items = media_urls.len(), "batch started");

        for (index, media_url) in media_urls.into_iter().enumerate() {
            let runner = self.clone();
            let detector = Arc::clone(&detector);
            let sessions = sessions.clone();
            let batch_id = batch_id.clone();
            let user_id = user_id.to_string();

            tokio::spawn(async move {
                runner
                    .run_item(detector, sessions, &batch_id, &user_id, index, &media_url)
                    .await;
            });
        }

        batch_id
    }

    /// Fetch a batch status, scoped to its owner.
    pub async fn get(&self, user_id: &str, batch_id: &str) -> Option<BatchStatus> {
        let batches = self.batches.read().await;
        batches
            .get(batch_id)
            .filter(|b| b.user_id == user_id)
            .cloned()
    }

    /// Process one item end to end, recording the outcome in the status map.
    async fn run_item(
        &self,
        detector: Arc<PoseDetector>,
        sessions: SessionStore,
        batch_id: &str,
        user_id: &str,
        index: usize,
        media_url: &str,
    ) {
        self.set_state(batch_id, index, BatchItemState::Processing)
            .await;

        let frames = match detector.detect(media_url).await {
            Ok(frames) => frames,
            Err(e) => {
                warn!(batch_id, index, error = %e, "batch item detection failed");
                metrics::record_batch_item("failed");
                self.fail_item(batch_id, index, e.to_string()).await;
                return;
            }
        };

        let record = analyze_pose(&frames);
        let session = AnalysisSession::new(user_id, media_url, &record, frames);
        let session_id = session.id.clone();

        if let Err(e) = sessions.create(session).await {
            warn!(batch_id, index, error = %e, "batch item persistence failed");
            metrics::record_batch_item("failed");
            self.fail_item(batch_id, index, e.to_string()).await;
            return;
        }

        metrics::record_batch_item("completed");

        let mut batches = self.batches.write().await;
        if let Some(batch) = batches.get_mut(batch_id) {
            if let Some(item) = batch.items.get_mut(index) {
                *item = item.clone().completed(session_id, record);
            }
        }
    }

    async fn set_state(&self, batch_id: &str, index: usize, state: BatchItemState) {
        let mut batches = self.batches.write().await;
        if let Some(item) = batches
            .get_mut(batch_id)
            .and_then(|b| b.items.get_mut(index))
        {
            item.state = state;
        }
    }

    async fn fail_item(&self, batch_id: &str, index: usize, message: String) {
        let mut batches = self.batches.write().await;
        if let Some(item) = batches
            .get_mut(batch_id)
            .and_then(|b| b.items.get_mut(index))
        {
            *item = item.clone().failed(message);
        }
    }
}
