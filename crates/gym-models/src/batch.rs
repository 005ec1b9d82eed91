//! Batch analysis progress tracking.
//!
//! A batch is a set of independently analyzed media items. Item failures are
//! isolated: one item failing detection or scoring never affects the others.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::score::ScoreRecord;

/// Processing state of one batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchItemState {
    /// Item is queued, waiting to start
    #[default]
    Waiting,
    /// Detection/scoring in progress
    Processing,
    /// Analysis completed successfully
    Completed,
    /// Analysis failed; other items are unaffected
    Failed,
}

impl BatchItemState {
    /// Returns the state as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Returns true if the item has finished (completed or failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Per-item status within a batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchItemStatus {
    /// Source media location
    pub media_url: String,

    /// Current state
    pub state: BatchItemState,

    /// Sanitized error message for user display (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Persisted session ID (if completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Score record (if completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreRecord>,
}

impl BatchItemStatus {
    /// Create a waiting item for a media URL.
    pub fn waiting(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            state: BatchItemState::Waiting,
            error_message: None,
            session_id: None,
            score: None,
        }
    }

    /// Mark the item completed with its session and score.
    pub fn completed(mut self, session_id: impl Into<String>, score: ScoreRecord) -> Self {
        self.state = BatchItemState::Completed;
        self.session_id = Some(session_id.into());
        self.score = Some(score);
        self
    }

    /// Mark the item failed with a display message.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.state = BatchItemState::Failed;
        self.error_message = Some(message.into());
        self
    }
}

/// Aggregate view of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchStatus {
    /// Batch identifier (UUID)
    pub batch_id: String,

    /// User who started the batch
    pub user_id: String,

    /// Per-item status, in submission order
    pub items: Vec<BatchItemStatus>,

    /// When the batch was started
    pub created_at: DateTime<Utc>,
}

impl BatchStatus {
    /// Create a new batch with all items waiting.
    pub fn new(user_id: impl Into<String>, media_urls: &[String]) -> Self {
        Self {
            batch_id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            items: media_urls
                .iter()
                .map(|url| BatchItemStatus::waiting(url.clone()))
                .collect(),
            created_at: Utc::now(),
        }
    }

    /// True when every item has finished.
    pub fn is_finished(&self) -> bool {
        self.items.iter().all(|item| item.state.is_terminal())
    }

    /// Number of completed items.
    pub fn completed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.state == BatchItemState::Completed)
            .count()
    }

    /// Number of failed items.
    pub fn failed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.state == BatchItemState::Failed)
            .count()
    }

    /// Mean composite score over completed items, if any.
    pub fn average_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .items
            .iter()
            .filter_map(|i| i.score.as_ref().map(|s| s.ai_score))
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(ai: f64) -> ScoreRecord {
        ScoreRecord {
            ai_score: ai,
            posture: 80,
            stability: 80,
            smoothness: 80,
            feedback: vec![],
            avg_knee_angle: 170.0,
            avg_hip_angle: 175.0,
            landing_stability: 80.0,
        }
    }

    #[test]
    fn test_item_state_terminal() {
        assert!(!BatchItemState::Waiting.is_terminal());
        assert!(!BatchItemState::Processing.is_terminal());
        assert!(BatchItemState::Completed.is_terminal());
        assert!(BatchItemState::Failed.is_terminal());
    }

    #[test]
    fn test_batch_aggregates() {
        let urls = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut batch = BatchStatus::new("user-1", &urls);
        assert!(!batch.is_finished());
        assert_eq!(batch.average_score(), None);

        batch.items[0] = batch.items[0].clone().completed("s1", score(8.0));
        batch.items[1] = batch.items[1].clone().completed("s2", score(6.0));
        batch.items[2] = batch.items[2].clone().failed("detector unavailable");

        assert!(batch.is_finished());
        assert_eq!(batch.completed_count(), 2);
        assert_eq!(batch.failed_count(), 1);
        assert_eq!(batch.average_score(), Some(7.0));
    }
}
