//! Single-media analysis handler.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use gym_models::{AnalysisSession, Frame, ScoreBand, ScoreRecord};
use gym_scoring::analyze_pose;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::{require_user, validate_media_url};
use crate::state::AppState;

/// Request to analyze one routine.
///
/// Exactly one frame source must be supplied: `media_url` (frames fetched
/// from the detection service) or inline `frames` (already-detected
/// landmarks, e.g. from an on-device detector).
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Media to run detection on
    #[serde(default)]
    pub media_url: Option<String>,
    /// Pre-detected landmark frames
    #[serde(default)]
    pub frames: Option<Vec<Frame>>,
    /// Media duration in seconds, if the caller knows it
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

/// Response for a completed analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Persisted session ID
    pub session_id: String,
    /// Media location the session refers to
    pub media_url: String,
    /// The score record
    pub score: ScoreRecord,
    /// Presentation band for the composite score
    pub band: ScoreBand,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

/// Analyze one routine and persist the resulting session.
///
/// Degenerate input (no frames, or no scorable frames) is not an error:
/// the engine's zero-score record is persisted and returned with 200.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let user_id = require_user(&headers)?;

    let (frames, media_url, source) = match (request.frames, request.media_url) {
        (Some(_), Some(_)) => {
            return Err(ApiError::bad_request(
                "provide either media_url or frames, not both",
            ));
        }
        (None, None) => {
            return Err(ApiError::bad_request(
                "one of media_url or frames is required",
            ));
        }
        (Some(frames), None) => (frames, "inline://frames".to_string(), "inline"),
        (None, Some(url)) => {
            let url = validate_media_url(&url)?;
            let frames = state.detector.detect(&url).await.map_err(|e| {
                warn!(error = %e, "detection failed");
                ApiError::from(e)
            })?;
            (frames, url, "detector")
        }
    };

    let record = analyze_pose(&frames);
    metrics::record_analysis(frames.len(), source);

    let mut session = AnalysisSession::new(&user_id, &media_url, &record, frames);
    if let Some(duration) = request.duration_seconds {
        session = session.with_duration(duration);
    }
    let session_id = session.id.clone();
    let created_at = session.created_at;

    state.sessions.create(session).await?;

    info!(
        session_id = %session_id,
        user_id = %user_id,
        ai_score = record.ai_score,
        "analysis completed"
    );

    Ok(Json(AnalyzeResponse {
        session_id,
        media_url,
        band: record.band(),
        score: record,
        created_at,
    }))
}
