//! Request handlers for the schools API.

mod body;
mod school;

pub use body::*;
pub use school::*;

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use chrono::Utc;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::{ApiError, ApiResult, ErrorCode};

/// Creates common response headers for API responses.
pub fn common_headers(ctx: &RequestContext) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        headers.insert("x-request-id", value);
    }
    if let Ok(value) = HeaderValue::from_str(&format_http_date(&Utc::now())) {
        headers.insert(header::DATE, value);
    }
    headers
}

/// Builds a JSON response with the given status, headers, and payload.
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: &T,
) -> ApiResult<Response<Body>> {
    let body = serde_json::to_vec(payload).map_err(|e| {
        ApiError::with_message(
            ErrorCode::InternalError,
            format!("failed to encode response: {}", e),
        )
    })?;
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Formats a DateTime as RFC 1123 format for HTTP headers.
pub fn format_http_date(dt: &chrono::DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
