//! School collection and item handlers.

use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

use crate::context::RequestContext;
use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::models::{Links, Meta, School, SchoolList};
use crate::pagination::Page;
use crate::storage::SchoolStore;

use super::{build_json_response, common_headers, parse_school_body};

/// GET /schools - List schools one page at a time.
pub async fn list_schools(
    ctx: &RequestContext,
    store: Arc<dyn SchoolStore>,
) -> ApiResult<Response<Body>> {
    let request = ctx.page_request()?;

    let snapshot = store.list().await?;
    let page = Page::from_snapshot(snapshot, request);
    let nav = page.navigation();

    let links = Links {
        first: ctx.page_link(nav.first)?,
        last: ctx.page_link(nav.last)?,
        next: nav.next.map(|p| ctx.page_link(p)).transpose()?,
        prev: nav.prev.map(|p| ctx.page_link(p)).transpose()?,
    };

    debug!(
        offset = request.offset(),
        limit = request.limit(),
        total = page.window.total(),
        pages = page.window.page_count(),
        returned = page.items.len(),
        "Listed schools"
    );

    let list = SchoolList {
        schools: page.items,
        meta: Meta {
            total: page.window.total(),
        },
        links,
    };

    build_json_response(StatusCode::OK, common_headers(ctx), &list)
}

/// POST /schools - Create a school.
pub async fn create_school(
    ctx: &RequestContext,
    store: Arc<dyn SchoolStore>,
    body: Bytes,
) -> ApiResult<Response<Body>> {
    let input = parse_school_body(&body)?;
    // Reject an unusable Host before the store is touched.
    ctx.base_url()?;

    let id = store.append(input.name.clone()).await?;
    info!(id, name = %input.name, "Created school");

    let mut headers = common_headers(ctx);
    let location = ctx.school_link(id)?;
    let location = HeaderValue::from_str(&location).map_err(|e| {
        ApiError::with_message(ErrorCode::InternalError, format!("invalid location: {}", e))
    })?;
    headers.insert(header::LOCATION, location);

    build_json_response(StatusCode::CREATED, headers, &School::new(id, input.name))
}

/// GET /schools/{id} - Fetch a single school.
pub async fn get_school(
    ctx: &RequestContext,
    store: Arc<dyn SchoolStore>,
) -> ApiResult<Response<Body>> {
    let id = ctx.school_id()?;
    let name = store.get(id).await?;
    debug!(id, "Fetched school");

    build_json_response(StatusCode::OK, common_headers(ctx), &School::new(id, name))
}

/// PUT /schools/{id} - Rename a school. The id never changes.
pub async fn update_school(
    ctx: &RequestContext,
    store: Arc<dyn SchoolStore>,
    body: Bytes,
) -> ApiResult<Response<Body>> {
    let id = ctx.school_id()?;
    let input = parse_school_body(&body)?;

    store.update(id, input.name.clone()).await?;
    info!(id, name = %input.name, "Updated school");

    build_json_response(StatusCode::OK, common_headers(ctx), &School::new(id, input.name))
}
