//! Screens and dialogs of the car-market front-end.
//!
//! Every stateful component follows the same split: `state` holds the struct,
//! `messages` its `Msg` enum, `update` the message handling and `view` the
//! rendering, with `mod.rs` wiring them into the Yew `Component` impl.

pub mod car_detail;
pub mod car_form;
pub mod listing;
pub mod manage;
pub mod navbar;

use common::error::ApiError;
use common::listing::FetchTicket;
use common::model::car::CarListItem;
use common::model::paged::PagedResult;
use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::Component;

use crate::services::cars;

pub type PageOutcome = Result<PagedResult<CarListItem>, ApiError>;

/// Sends the ticket's query to `GET /Cars` and reports back to `link` once the
/// response (or failure) is in.
pub fn spawn_car_fetch<C: Component>(
    link: &Scope<C>,
    ticket: FetchTicket,
    into_msg: fn(FetchTicket, PageOutcome) -> C::Message,
) {
    let link = link.clone();
    spawn_local(async move {
        let outcome = cars::list(ticket.query()).await;
        link.send_message(into_msg(ticket, outcome));
    });
}

/// `45250.0` → `$45,250`, `18500.5` → `$18,500.50`.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    match (cents % 100).abs() {
        0 => format!("${}", whole),
        fraction => format!("${}.{:02}", whole, fraction),
    }
}
