use common::listing::{ListController, PagingMode, SearchDebouncer};
use common::requests::ViewQuery;
use yew_router::scope_ext::LocationHandle;

use crate::config::LISTING_BATCH_SIZE;

pub struct ListingComponent {
    pub list: ListController,
    pub debouncer: SearchDebouncer,

    /// Contents of the search box, which may run ahead of the searched term.
    pub search_input: String,

    /// Last `q` read from the URL. Only a change of this value re-searches on
    /// navigation, so typed terms survive unrelated URL updates.
    pub url_term: String,

    pub dialog_open: bool,

    /// A create request is in flight.
    pub saving: bool,

    /// Guard for the one-time initial fetch.
    pub loaded: bool,

    pub location_listener: Option<LocationHandle>,
}

impl ListingComponent {
    pub fn new(query: &ViewQuery) -> Self {
        Self {
            list: ListController::new(PagingMode::Accumulate, LISTING_BATCH_SIZE),
            debouncer: SearchDebouncer::new(),
            search_input: query.term().to_string(),
            url_term: query.term().to_string(),
            dialog_open: query.wants_add_dialog(),
            saving: false,
            loaded: false,
            location_listener: None,
        }
    }
}
