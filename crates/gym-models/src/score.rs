//! Score records produced by the pose scoring engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of analyzing one routine's landmark frames.
///
/// Created once per analysis run and never mutated; re-analyzing produces a
/// new record. `ai_score` is derived from the rounded integer sub-scores
/// (`posture*0.4 + stability*0.3 + smoothness*0.3`, scaled to 0-10 and
/// rounded to one decimal) and is persisted alongside its inputs so it can
/// always be recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreRecord {
    /// Composite performance score, 0.0-10.0, one decimal
    pub ai_score: f64,
    /// Joint-angle sub-score, 0-100
    pub posture: u32,
    /// Balance sub-score, 0-100
    pub stability: u32,
    /// Deviation-frequency sub-score, 0-100
    pub smoothness: u32,
    /// Human-readable coaching feedback, in display order
    pub feedback: Vec<String>,
    /// Mean knee angle over valid frames, degrees
    pub avg_knee_angle: f64,
    /// Mean hip angle over valid frames, degrees
    pub avg_hip_angle: f64,
    /// Fraction of valid frames with balanced hip/ankle alignment, as a
    /// percentage before rounding
    pub landing_stability: f64,
}

impl ScoreRecord {
    /// Presentation band for this record's composite score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.ai_score)
    }

    /// Recompute the composite from the record's own sub-scores.
    ///
    /// Matches `ai_score` within rounding tolerance for any record the
    /// engine produced.
    pub fn recompute_ai_score(&self) -> f64 {
        let weighted =
            self.posture as f64 * 0.4 + self.stability as f64 * 0.3 + self.smoothness as f64 * 0.3;
        let scaled = weighted / 10.0;
        (scaled * 10.0).round() / 10.0
    }
}

/// Pass/fail style badge thresholds on the 0-10 composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    /// Classify a 0-10 composite score.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Good
        } else if score >= 5.0 {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(9.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(8.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(7.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(5.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(4.9), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_recompute_matches_weighting() {
        let record = ScoreRecord {
            ai_score: 9.4,
            posture: 85,
            stability: 100,
            smoothness: 100,
            feedback: vec![],
            avg_knee_angle: 180.0,
            avg_hip_angle: 180.0,
            landing_stability: 100.0,
        };
        assert!((record.recompute_ai_score() - record.ai_score).abs() < 0.05);
    }
}
