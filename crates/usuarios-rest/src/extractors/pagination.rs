//! Pagination extractor.

use serde::Deserialize;
use usuarios_core::{PageRequest, SortOrder};

/// Query parameters for pagination.
///
/// `sort` takes a Spring-style `field,direction` value; an
/// unrecognized value falls back to the default (insertion) ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        let sort = query.sort.as_deref().and_then(SortOrder::parse);
        PageRequest::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
        .with_sort(sort)
    }
}
