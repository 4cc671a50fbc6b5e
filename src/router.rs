//! Request routing for the schools API.

use axum::{
    body::Body,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, Query, State,
    },
    http::{HeaderMap, Method, Response, StatusCode, Uri},
    response::IntoResponse,
    routing::any,
    Router,
};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::context::RequestContext;
use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::handlers;
use crate::storage::SchoolStore;

/// Application state shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn SchoolStore>,
}

/// Creates the main router for the schools service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schools", any(collection_handler))
        .route("/schools/:id", any(item_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Handler for collection-level operations.
async fn collection_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Result<Bytes, BytesRejection>,
) -> Response<Body> {
    let ctx = RequestContext::new(
        method,
        uri,
        headers,
        HashMap::new(),
        query,
        state.config.bind_address(),
    );

    let result = route_collection_request(&ctx, &state, body).await;
    match result {
        Ok(response) => response,
        Err(e) => e.with_request_id(&ctx.request_id).into_response(),
    }
}

/// Handler for single-school operations.
async fn item_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    path: Result<Path<HashMap<String, String>>, PathRejection>,
    Query(query): Query<HashMap<String, String>>,
    body: Result<Bytes, BytesRejection>,
) -> Response<Body> {
    // An id segment that cannot be decoded is treated as absent, which
    // `RequestContext::school_id` reports as `InvalidId`.
    let params = match path {
        Ok(Path(params)) => params,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Rejected school id segment");
            HashMap::new()
        }
    };

    let ctx = RequestContext::new(
        method,
        uri,
        headers,
        params,
        query,
        state.config.bind_address(),
    );

    let result = route_item_request(&ctx, &state, body).await;
    match result {
        Ok(response) => response,
        Err(e) => e.with_request_id(&ctx.request_id).into_response(),
    }
}

/// Handler for paths outside the API.
async fn fallback_handler(uri: Uri) -> Response<Body> {
    ApiError::with_message(
        ErrorCode::NotFound,
        format!("No resource at {}", uri.path()),
    )
    .into_response()
}

/// Routes collection-level requests.
async fn route_collection_request(
    ctx: &RequestContext,
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Response<Body>> {
    match ctx.method.as_str() {
        "GET" => handlers::list_schools(ctx, state.store.clone()).await,
        "POST" => {
            let body = body.map_err(body_error)?;
            handlers::create_school(ctx, state.store.clone(), body).await
        }
        _ => Err(unsupported_method(ctx)),
    }
}

/// Routes single-school requests.
async fn route_item_request(
    ctx: &RequestContext,
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Response<Body>> {
    match ctx.method.as_str() {
        "GET" => handlers::get_school(ctx, state.store.clone()).await,
        "PUT" => {
            // The id is checked before the body.
            ctx.school_id()?;
            let body = body.map_err(body_error)?;
            handlers::update_school(ctx, state.store.clone(), body).await
        }
        _ => Err(unsupported_method(ctx)),
    }
}

/// Converts a body that could not be buffered into the API error shape.
fn body_error(rejection: BytesRejection) -> ApiError {
    let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorCode::BodyTooLarge
    } else {
        ErrorCode::InvalidBody
    };
    ApiError::with_message(code, rejection.body_text())
}

fn unsupported_method(ctx: &RequestContext) -> ApiError {
    ApiError::with_message(
        ErrorCode::MethodNotAllowed,
        format!("No {} operation at {}", ctx.method, ctx.uri.path()),
    )
}
