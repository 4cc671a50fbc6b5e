//! Offset/limit pagination over an ordered collection.
//!
//! A [`PageRequest`] is the validated `(limit, offset)` pair supplied by a
//! client. Combined with the collection's current length it yields a
//! [`PageWindow`], which knows which positions to return and where the
//! first, last, next and previous pages start. Requests are validated
//! independently of the collection size, so an offset past the end is not an
//! error: it produces an empty page whose links lead back into range.

use std::collections::HashMap;
use std::ops::Range;

use crate::error::{ApiError, ApiResult, ErrorCode};

/// Name of the page size query parameter.
pub const LIMIT_PARAM: &str = "limit";

/// Name of the page start query parameter.
pub const OFFSET_PARAM: &str = "offset";

/// Smallest accepted page size.
pub const MIN_LIMIT: u64 = 1;

/// Largest accepted page size.
pub const MAX_LIMIT: u64 = 100;

/// Page size used when the client does not supply one.
pub const DEFAULT_LIMIT: u64 = 100;

/// Page start used when the client does not supply one.
pub const DEFAULT_OFFSET: u64 = 0;

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u64,
    offset: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageRequest {
    /// Creates a request, checking `limit` against `[MIN_LIMIT, MAX_LIMIT]`
    /// and `offset` against zero.
    pub fn new(limit: i64, offset: i64) -> ApiResult<Self> {
        Ok(Self {
            limit: check_limit(limit)?,
            offset: check_offset(offset)?,
        })
    }

    /// Parses `limit` and `offset` from query parameters, applying defaults
    /// for absent values. `limit` is checked first.
    pub fn from_query(query: &HashMap<String, String>) -> ApiResult<Self> {
        let limit = match query.get(LIMIT_PARAM) {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ApiError::with_message(
                    ErrorCode::InvalidLimit,
                    "limit query parameter must be a number",
                )
            })?,
            None => DEFAULT_LIMIT as i64,
        };
        let limit = check_limit(limit)?;

        let offset = match query.get(OFFSET_PARAM) {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ApiError::with_message(
                    ErrorCode::InvalidOffset,
                    "offset query parameter must be a number",
                )
            })?,
            None => DEFAULT_OFFSET as i64,
        };
        let offset = check_offset(offset)?;

        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Places this request against a collection of `total` items.
    pub fn window(&self, total: u64) -> PageWindow {
        PageWindow {
            limit: self.limit,
            offset: self.offset,
            total,
        }
    }
}

fn check_limit(limit: i64) -> ApiResult<u64> {
    u64::try_from(limit)
        .ok()
        .filter(|l| (MIN_LIMIT..=MAX_LIMIT).contains(l))
        .ok_or_else(|| {
            ApiError::with_message(
                ErrorCode::InvalidLimit,
                format!(
                    "limit query parameter must be at least {} and no greater than {}",
                    MIN_LIMIT, MAX_LIMIT
                ),
            )
        })
}

fn check_offset(offset: i64) -> ApiResult<u64> {
    u64::try_from(offset).map_err(|_| {
        ApiError::with_message(
            ErrorCode::InvalidOffset,
            format!("offset query parameter must be at least {}", DEFAULT_OFFSET),
        )
    })
}

/// Reference to a page: where it starts and how many items it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    pub offset: u64,
    pub limit: u64,
}

/// The pages surrounding a window. `next` and `prev` are `None` when no
/// such page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub first: PageRef,
    pub last: PageRef,
    pub next: Option<PageRef>,
    pub prev: Option<PageRef>,
}

/// A validated request placed against the collection's current size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: u64,
    offset: u64,
    total: u64,
}

impl PageWindow {
    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Positions covered by this window, clamped to the collection.
    pub fn range(&self) -> Range<u64> {
        let start = self.offset.min(self.total);
        let end = self.offset.saturating_add(self.limit).min(self.total);
        start..end
    }

    /// Number of items the window selects.
    pub fn len(&self) -> u64 {
        let range = self.range();
        range.end - range.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `limit`-sized pages needed to hold the collection.
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }

    /// Start of the final page, aligned to `limit`. Zero for an empty
    /// collection.
    pub fn last_offset(&self) -> u64 {
        match self.total {
            0 => 0,
            total => self.limit * ((total - 1) / self.limit),
        }
    }

    /// Start of the following page, if any items remain after this window.
    pub fn next_offset(&self) -> Option<u64> {
        let next = self.offset.saturating_add(self.limit);
        (next < self.total).then_some(next)
    }

    /// Start of the preceding page, if this window does not start at zero.
    pub fn prev_offset(&self) -> Option<u64> {
        if self.offset == 0 {
            return None;
        }
        let prev = self.offset.saturating_sub(self.limit);
        // A window that started past the end steps back onto the last page.
        if prev >= self.total {
            Some(self.last_offset())
        } else {
            Some(prev)
        }
    }

    pub fn navigation(&self) -> Navigation {
        let page = |offset| PageRef {
            offset,
            limit: self.limit,
        };
        Navigation {
            first: page(0),
            last: page(self.last_offset()),
            next: self.next_offset().map(page),
            prev: self.prev_offset().map(page),
        }
    }
}

/// Items selected by a window, together with the window itself.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
}

impl<T> Page<T> {
    /// Takes the items of `request` out of a full snapshot of the collection.
    pub fn from_snapshot(snapshot: Vec<T>, request: PageRequest) -> Self {
        let window = request.window(snapshot.len() as u64);
        let range = window.range();
        let items = snapshot
            .into_iter()
            .skip(range.start as usize)
            .take((range.end - range.start) as usize)
            .collect();
        Self { items, window }
    }

    pub fn navigation(&self) -> Navigation {
        self.window.navigation()
    }
}
