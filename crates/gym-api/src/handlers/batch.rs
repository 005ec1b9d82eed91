//! Batch analysis handlers.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use gym_models::BatchStatus;

use crate::error::{ApiError, ApiResult};
use crate::security::{require_user, validate_media_url};
use crate::state::AppState;

/// Request to analyze a set of media items.
#[derive(Debug, Deserialize, Validate)]
pub struct StartBatchRequest {
    /// Media locations, one item per upload
    #[validate(length(min = 1, message = "at least one media URL is required"))]
    pub media_urls: Vec<String>,
}

/// Response from starting a batch.
#[derive(Debug, Serialize)]
pub struct StartBatchResponse {
    /// Batch ID for polling progress
    pub batch_id: String,
    /// Number of items accepted
    pub item_count: usize,
}

/// Aggregate batch view returned while polling.
#[derive(Debug, Serialize)]
pub struct BatchStatusResponse {
    /// Per-item status and results
    #[serde(flatten)]
    pub batch: BatchStatus,
    /// True when every item has finished
    pub finished: bool,
    /// Completed item count
    pub completed: usize,
    /// Failed item count
    pub failed: usize,
    /// Mean composite score over completed items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
}

/// Start analyzing a set of media URLs concurrently.
pub async fn start_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<StartBatchRequest>,
) -> ApiResult<Json<StartBatchResponse>> {
    let user_id = require_user(&headers)?;

    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    if request.media_urls.len() > state.config.max_batch_items {
        return Err(ApiError::bad_request(format!(
            "batch exceeds the {}-item limit",
            state.config.max_batch_items
        )));
    }

    let mut media_urls = Vec::with_capacity(request.media_urls.len());
    for url in &request.media_urls {
        media_urls.push(validate_media_url(url)?);
    }

    let item_count = media_urls.len();
    let batch_id = state
        .batches
        .start(
            Arc::clone(&state.detector),
            state.sessions.clone(),
            &user_id,
            media_urls,
        )
        .await;

    info!(batch_id = %batch_id, user_id = %user_id, item_count, "batch accepted");

    Ok(Json(StartBatchResponse {
        batch_id,
        item_count,
    }))
}

/// Poll a batch's per-item progress and aggregate results.
pub async fn get_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<BatchStatusResponse>> {
    let user_id = require_user(&headers)?;

    let batch = state
        .batches
        .get(&user_id, &batch_id)
        .await
        .ok_or_else(|| ApiError::not_found("Batch not found"))?;

    Ok(Json(BatchStatusResponse {
        finished: batch.is_finished(),
        completed: batch.completed_count(),
        failed: batch.failed_count(),
        average_score: batch.average_score(),
        batch,
    }))
}
