//! Request validation helpers.

use axum::http::HeaderMap;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Header carrying the caller's user ID. Authentication itself is handled
/// upstream; the API only scopes data by this identity.
pub const USER_ID_HEADER: &str = "x-user-id";

const MAX_USER_ID_LEN: usize = 128;

/// Extract and sanity-check the user ID header.
pub fn require_user(headers: &HeaderMap) -> ApiResult<String> {
    let value = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();

    if value.is_empty() {
        return Err(ApiError::unauthorized("missing X-User-Id header"));
    }
    if value.len() > MAX_USER_ID_LEN
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::unauthorized("invalid X-User-Id header"));
    }
    Ok(value.to_string())
}

/// Validate a media URL: parseable, http(s) scheme, has a host.
pub fn validate_media_url(raw: &str) -> ApiResult<String> {
    let url = Url::parse(raw.trim())
        .map_err(|_| ApiError::bad_request(format!("invalid media URL: {raw}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::bad_request(format!(
            "unsupported URL scheme: {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(ApiError::bad_request("media URL has no host".to_string()));
    }
    Ok(url.to_string())
}
