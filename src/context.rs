//! Request context extraction and handling.

use axum::http::{header::HeaderMap, Method, Uri};
use std::collections::HashMap;
use url::Url;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::pagination::{PageRef, PageRequest, LIMIT_PARAM, OFFSET_PARAM};

/// Path of the schools collection.
pub const SCHOOLS_PATH: &str = "/schools";

/// Extracted request context containing all relevant information.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID.
    pub request_id: String,
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
    /// Raw school id path segment (if present).
    pub id_segment: Option<String>,
    /// Query parameters.
    pub query_params: HashMap<String, String>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Host used for links when the request carries no Host header.
    pub default_host: String,
}

impl RequestContext {
    /// Creates a new request context from request parts.
    pub fn new(
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        path_params: HashMap<String, String>,
        query_params: HashMap<String, String>,
        default_host: impl Into<String>,
    ) -> Self {
        let request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            request_id,
            method,
            uri,
            id_segment: path_params.get("id").cloned(),
            query_params,
            headers,
            default_host: default_host.into(),
        }
    }

    /// Returns the value of a header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the validated pagination parameters of a list request.
    pub fn page_request(&self) -> ApiResult<PageRequest> {
        PageRequest::from_query(&self.query_params)
    }

    /// Parses the school id path segment.
    ///
    /// A non-numeric segment is `InvalidId`. A negative number can never name
    /// a stored school and is reported as `NotFound`.
    pub fn school_id(&self) -> ApiResult<u64> {
        let raw = self
            .id_segment
            .as_deref()
            .ok_or_else(|| ApiError::new(ErrorCode::InvalidId))?;
        let id: i64 = raw
            .parse()
            .map_err(|_| ApiError::new(ErrorCode::InvalidId))?;
        u64::try_from(id).map_err(|_| ApiError::school_not_found(id))
    }

    /// Returns the scheme clients used to reach the service.
    pub fn scheme(&self) -> &str {
        match self.header("x-forwarded-proto") {
            Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
            _ => "http",
        }
    }

    /// Returns the host clients used to reach the service.
    pub fn host(&self) -> &str {
        self.header("host").unwrap_or(&self.default_host)
    }

    /// Returns `<scheme>://<host>` for this request.
    pub fn base_url(&self) -> ApiResult<Url> {
        Url::parse(&format!("{}://{}", self.scheme(), self.host())).map_err(|e| {
            ApiError::with_message(ErrorCode::InvalidHost, format!("invalid host: {}", e))
        })
    }

    /// Builds the absolute URL of a single school.
    pub fn school_link(&self, id: u64) -> ApiResult<String> {
        let mut url = self.base_url()?;
        url.set_path(&format!("{}/{}", SCHOOLS_PATH, id));
        Ok(url.to_string())
    }

    /// Builds the absolute URL of a page of the schools collection.
    pub fn page_link(&self, page: PageRef) -> ApiResult<String> {
        let mut url = self.base_url()?;
        url.set_path(SCHOOLS_PATH);
        url.query_pairs_mut()
            .append_pair(OFFSET_PARAM, &page.offset.to_string())
            .append_pair(LIMIT_PARAM, &page.limit.to_string());
        Ok(url.to_string())
    }
}
