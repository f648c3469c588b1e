//! Request shapes and endpoint paths of the car-market API, plus the query
//! string the list screens read from the browser URL.

use serde::{Deserialize, Serialize};

pub mod endpoints;

/// Filter and paging parameters of `GET /Cars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    pub term: String,
    pub page: u32,
    pub page_size: u32,
}

impl CarQuery {
    /// Query-string pairs in the order the API documents them.
    /// `q` is always present, empty when there is no search term.
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("q", self.term.clone()),
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

/// Query parameters of the `/listing` and `/manage` routes.
///
/// `q` seeds the search box; `add=1` opens the add-car dialog on `/listing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<String>,
}

impl ViewQuery {
    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn wants_add_dialog(&self) -> bool {
        self.add.as_deref() == Some("1")
    }

    /// The same query with the `add` flag dropped, used when the dialog closes.
    pub fn without_add(&self) -> Self {
        Self {
            q: self.q.clone().filter(|q| !q.is_empty()),
            add: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_listing_page_query() {
        let query = CarQuery {
            term: String::new(),
            page: 1,
            page_size: 9,
        };
        assert_eq!(
            query.pairs(),
            [
                ("q", String::new()),
                ("page", "1".to_string()),
                ("pageSize", "9".to_string())
            ]
        );
    }

    #[test]
    fn add_flag_only_accepts_one() {
        let open = ViewQuery {
            q: None,
            add: Some("1".into()),
        };
        let other = ViewQuery {
            q: None,
            add: Some("true".into()),
        };
        assert!(open.wants_add_dialog());
        assert!(!other.wants_add_dialog());
    }

    #[test]
    fn closing_dialog_keeps_search_term() {
        let query = ViewQuery {
            q: Some("bmw".into()),
            add: Some("1".into()),
        };
        let closed = query.without_add();
        assert_eq!(closed.term(), "bmw");
        assert!(closed.add.is_none());
    }
}
