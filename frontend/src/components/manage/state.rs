use common::forms::car::CarForm;
use common::listing::{ListController, PagingMode, SearchDebouncer};
use yew_router::scope_ext::LocationHandle;

use crate::config::MANAGE_PAGE_SIZE;

/// What submitting the shared dialog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Update(u64),
}

pub struct ManageComponent {
    pub list: ListController,
    pub debouncer: SearchDebouncer,
    pub search_input: String,
    pub url_term: String,

    /// `Some` while the add/edit dialog is open.
    pub dialog: Option<FormTarget>,

    /// Values the dialog opens with: empty for add, the row for edit.
    pub form_initial: CarForm,

    pub saving: bool,
    pub loaded: bool,
    pub location_listener: Option<LocationHandle>,
}

impl ManageComponent {
    pub fn new(term: String) -> Self {
        Self {
            list: ListController::new(PagingMode::Replace, MANAGE_PAGE_SIZE),
            debouncer: SearchDebouncer::new(),
            search_input: term.clone(),
            url_term: term,
            dialog: None,
            form_initial: CarForm::default(),
            saving: false,
            loaded: false,
            location_listener: None,
        }
    }
}
