use crate::domain::article::PageWindow;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Resolves raw `limit` / `offset` query values into a page window.
///
/// A `limit` that is absent, unparsable or below 1 becomes 10; an `offset`
/// that is absent, unparsable or negative becomes 0. There is no upper bound
/// on `limit`.
pub fn resolve_page(limit: Option<&str>, offset: Option<&str>) -> PageWindow {
    let limit = limit
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|limit| *limit >= 1)
        .unwrap_or(DEFAULT_LIMIT);
    let offset = offset
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|offset| *offset >= 0)
        .unwrap_or(DEFAULT_OFFSET);

    PageWindow { limit, offset }
}

/// A limit/offset page together with the unfiltered total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub limit: i64,
    pub offset: i64,
}

impl<T> OffsetPage<T> {
    pub fn new(data: Vec<T>, total: u64, window: PageWindow) -> Self {
        Self {
            data,
            total,
            limit: window.limit,
            offset: window.offset,
        }
    }
}
