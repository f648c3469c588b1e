use serde::{Deserialize, Serialize};

/// One page of a server-side filtered collection.
///
/// `total_count` counts the whole filtered set on the server, not the items of
/// this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}
