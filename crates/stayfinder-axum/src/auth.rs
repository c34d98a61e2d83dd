//! API-key authentication middleware.
//!
//! Every `/api/*` request must carry the configured key in the
//! `X-API-KEY` header. `/health` stays unauthenticated so load balancers
//! can probe without credentials.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Validate the `X-API-KEY` header against the configured key.
///
/// Rejections return 401 with the standard JSON error body and are logged
/// at `warn` with the request path.
pub(crate) async fn validate_api_key(expected: Arc<str>, req: Request, next: Next) -> Response {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected.as_ref() => next.run(req).await,
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                "rejected API request - missing or invalid API key"
            );
            HttpError::Unauthorized("Missing or invalid API key".into()).into_response()
        }
    }
}
