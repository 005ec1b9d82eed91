//! Persisted analysis sessions.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::score::{ScoreBand, ScoreRecord};

/// One completed analysis, as persisted.
///
/// Sessions are immutable: a new analysis of the same media produces a new
/// session rather than an update. The full landmark sequence is stored so
/// the overlay can be re-rendered later without re-running detection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisSession {
    /// Unique identifier (UUID)
    pub id: String,

    /// User who owns this session
    pub user_id: String,

    /// Source media location
    pub media_url: String,

    /// Media duration in seconds, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,

    /// Composite performance score, 0.0-10.0
    pub ai_score: f64,

    /// Posture sub-score, 0-100
    pub posture_score: u32,

    /// Stability sub-score, 0-100
    pub stability_score: u32,

    /// Smoothness sub-score, 0-100
    pub smoothness_score: u32,

    /// Mean knee angle over valid frames, degrees
    pub avg_knee_angle: f64,

    /// Mean hip angle over valid frames, degrees
    pub avg_hip_angle: f64,

    /// Landing stability percentage before rounding
    pub landing_stability: f64,

    /// Coaching feedback lines, in display order
    pub feedback: Vec<String>,

    /// The full landmark sequence the scores were computed from
    pub frames: Vec<Frame>,

    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl AnalysisSession {
    /// Create a session from an analysis result.
    pub fn new(
        user_id: impl Into<String>,
        media_url: impl Into<String>,
        record: &ScoreRecord,
        frames: Vec<Frame>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            media_url: media_url.into(),
            duration_seconds: None,
            ai_score: record.ai_score,
            posture_score: record.posture,
            stability_score: record.stability,
            smoothness_score: record.smoothness,
            avg_knee_angle: record.avg_knee_angle,
            avg_hip_angle: record.avg_hip_angle,
            landing_stability: record.landing_stability,
            feedback: record.feedback.clone(),
            frames,
            created_at: Utc::now(),
        }
    }

    /// Set the media duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Presentation band for this session's composite score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.ai_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ScoreRecord {
        ScoreRecord {
            ai_score: 9.4,
            posture: 85,
            stability: 100,
            smoothness: 100,
            feedback: vec!["Good leg extension! Knee angles are well maintained.".to_string()],
            avg_knee_angle: 180.0,
            avg_hip_angle: 180.0,
            landing_stability: 100.0,
        }
    }

    #[test]
    fn test_session_copies_score_fields() {
        let session = AnalysisSession::new("user-1", "https://example.com/routine.mp4", &record(), vec![]);
        assert_eq!(session.ai_score, 9.4);
        assert_eq!(session.posture_score, 85);
        assert_eq!(session.feedback.len(), 1);
        assert_eq!(session.band(), ScoreBand::Excellent);
        assert!(session.duration_seconds.is_none());
    }

    #[test]
    fn test_with_duration() {
        let session = AnalysisSession::new("user-1", "u", &record(), vec![]).with_duration(12.5);
        assert_eq!(session.duration_seconds, Some(12.5));
    }
}
