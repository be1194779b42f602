use serde::Deserialize;

/// Optional paging of timeline routes. Missing or zero values fall back to page 1 and 20 posts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PagingQuery {
    pub page: Option<u32>,
    pub count: Option<u32>,
}
