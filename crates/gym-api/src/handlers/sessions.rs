//! Session history handlers.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gym_models::{AnalysisSession, ScoreBand};
use gym_scoring::sessions_to_csv;

use crate::error::{ApiError, ApiResult};
use crate::security::require_user;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

/// One session in the history list, without the landmark payload.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub id: String,
    pub media_url: String,
    pub ai_score: f64,
    pub band: ScoreBand,
    pub posture_score: u32,
    pub stability_score: u32,
    pub smoothness_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<&AnalysisSession> for SessionSummary {
    fn from(session: &AnalysisSession) -> Self {
        Self {
            id: session.id.clone(),
            media_url: session.media_url.clone(),
            ai_score: session.ai_score,
            band: session.band(),
            posture_score: session.posture_score,
            stability_score: session.stability_score,
            smoothness_score: session.smoothness_score,
            duration_seconds: session.duration_seconds,
            created_at: session.created_at,
        }
    }
}

/// Session list response.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub sessions: Vec<SessionSummary>,
    pub total: usize,
}

/// List the caller's sessions, newest first.
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> ApiResult<Json<ListResponse>> {
    let user_id = require_user(&headers)?;

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0);

    let sessions = state.sessions.list(&user_id, limit, offset).await;
    let total = state.sessions.count(&user_id).await;

    Ok(Json(ListResponse {
        sessions: sessions.iter().map(SessionSummary::from).collect(),
        total,
    }))
}

/// Fetch one session including its landmark frames (for re-rendering the
/// skeleton overlay).
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<AnalysisSession>> {
    let user_id = require_user(&headers)?;

    state
        .sessions
        .get(&user_id, &session_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Session not found"))
}

/// Delete one session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let user_id = require_user(&headers)?;
    state.sessions.delete(&user_id, &session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Export the caller's full session history as CSV.
pub async fn export_sessions_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = require_user(&headers)?;

    let total = state.sessions.count(&user_id).await;
    let sessions = state.sessions.list(&user_id, total, 0).await;
    let csv = sessions_to_csv(&sessions);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sessions.csv\"",
            ),
        ],
        csv,
    ))
}
