use common::error::ApiError;
use common::listing::FetchTicket;
use common::requests::ViewQuery;

use crate::components::car_form::CarSubmission;
use crate::components::PageOutcome;

pub enum Msg {
    SearchInput(String),
    /// The quiet period of the given debounce ticket ran out.
    SearchSettled(u64),
    ClearSearch,
    QueryChanged(ViewQuery),
    LoadMore,
    Fetched(FetchTicket, PageOutcome),
    OpenDialog,
    CloseDialog,
    SubmitCar(CarSubmission),
    CarSaved,
    SaveFailed(ApiError),
    ShowDetail(u64),
}
