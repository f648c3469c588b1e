use common::error::ApiError;
use common::listing::FetchTicket;
use common::model::car::CarListItem;
use common::requests::ViewQuery;

use super::state::FormTarget;
use crate::components::car_form::CarSubmission;
use crate::components::PageOutcome;

pub enum Msg {
    SearchInput(String),
    SearchSettled(u64),
    ClearSearch,
    QueryChanged(ViewQuery),
    ChangePage(i64),
    ChangePageSize(u32),
    Fetched(FetchTicket, PageOutcome),
    OpenAdd,
    OpenEdit(CarListItem),
    CloseDialog,
    Submit(CarSubmission),
    Saved(FormTarget),
    SaveFailed(FormTarget, ApiError),
    ConfirmDelete(CarListItem),
    Deleted(u64),
    DeleteFailed(ApiError),
}
