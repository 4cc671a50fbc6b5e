//! API error types and error response formatting.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error codes reported by the schools API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidLimit,
    InvalidOffset,
    InvalidId,
    InvalidBody,
    BodyTooLarge,
    InvalidHost,
    NotFound,
    MethodNotAllowed,
    InternalError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidLimit => "InvalidLimit",
            ErrorCode::InvalidOffset => "InvalidOffset",
            ErrorCode::InvalidId => "InvalidId",
            ErrorCode::InvalidBody => "InvalidBody",
            ErrorCode::BodyTooLarge => "BodyTooLarge",
            ErrorCode::InvalidHost => "InvalidHost",
            ErrorCode::NotFound => "NotFound",
            ErrorCode::MethodNotAllowed => "MethodNotAllowed",
            ErrorCode::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidLimit
            | ErrorCode::InvalidOffset
            | ErrorCode::InvalidId
            | ErrorCode::InvalidBody
            | ErrorCode::InvalidHost => StatusCode::BAD_REQUEST,
            ErrorCode::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidLimit => "limit query parameter is invalid",
            ErrorCode::InvalidOffset => "offset query parameter is invalid",
            ErrorCode::InvalidId => "school id must be a number",
            ErrorCode::InvalidBody => "request body is invalid",
            ErrorCode::BodyTooLarge => "request body exceeds the size limit",
            ErrorCode::InvalidHost => "Host header is not a valid authority",
            ErrorCode::NotFound => "The requested resource does not exist",
            ErrorCode::MethodNotAllowed => "The HTTP method is not supported for this resource",
            ErrorCode::InternalError => "The server encountered an internal error",
        }
    }
}

/// API error with code and message.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Option<String>,
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

impl ApiError {
    /// Creates a new error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
            request_id: None,
        }
    }

    /// Creates a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    /// Creates a `NotFound` error naming the missing school.
    pub fn school_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("School with id {} not found", id))
    }

    /// Sets the request ID for this error.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let request_id = self
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
        };

        let mut response = (status, Json(body)).into_response();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert("x-request-id", value);
        }
        response
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
