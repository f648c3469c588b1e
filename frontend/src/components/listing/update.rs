use common::requests::ViewQuery;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::messages::Msg;
use super::state::ListingComponent;
use crate::components::spawn_car_fetch;
use crate::config::SEARCH_QUIET_MS;
use crate::notify::{notify_error, notify_info};
use crate::router::Route;
use crate::services::cars;

pub fn update(component: &mut ListingComponent, ctx: &Context<ListingComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SearchInput(term) => {
            component.search_input = term.clone();
            schedule_search(component, ctx, term);
            true
        }
        Msg::ClearSearch => {
            component.search_input.clear();
            schedule_search(component, ctx, String::new());
            true
        }
        Msg::SearchSettled(ticket) => match component.debouncer.settle(ticket) {
            Some(term) => {
                let ticket = component.list.search(term);
                spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
                true
            }
            None => false,
        },
        Msg::QueryChanged(query) => {
            if query.wants_add_dialog() {
                component.dialog_open = true;
            }
            if query.term() != component.url_term {
                component.url_term = query.term().to_string();
                component.search_input = component.url_term.clone();
                component.debouncer.sync(component.url_term.as_str());
                let ticket = component.list.search(component.url_term.clone());
                spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
            }
            true
        }
        Msg::LoadMore => match component.list.load_more() {
            Some(ticket) => {
                spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
                true
            }
            None => false,
        },
        Msg::Fetched(ticket, outcome) => match outcome {
            Ok(page) => component.list.complete(&ticket, page),
            Err(err) => {
                let current = component.list.fail(&ticket);
                if current {
                    notify_error("Failed to load cars", err);
                }
                current
            }
        },
        Msg::OpenDialog => {
            component.dialog_open = true;
            true
        }
        Msg::CloseDialog => {
            close_dialog(component, ctx);
            true
        }
        Msg::SubmitCar(submission) => {
            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match cars::create(&submission.fields, submission.image.as_ref()).await {
                    Ok(()) => link.send_message(Msg::CarSaved),
                    Err(err) => link.send_message(Msg::SaveFailed(err)),
                }
            });
            true
        }
        Msg::CarSaved => {
            component.saving = false;
            close_dialog(component, ctx);
            notify_info("Car added.");
            let ticket = component.list.reset();
            spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
            true
        }
        Msg::SaveFailed(err) => {
            component.saving = false;
            notify_error("Failed to add car", err);
            true
        }
        Msg::ShowDetail(id) => {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::CarInfo { id });
            }
            false
        }
    }
}

/// Records the keystroke and wakes the component once the quiet period is over.
fn schedule_search(component: &mut ListingComponent, ctx: &Context<ListingComponent>, term: String) {
    let ticket = component.debouncer.input(term);
    let link = ctx.link().clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SEARCH_QUIET_MS).await;
        link.send_message(Msg::SearchSettled(ticket));
    });
}

/// Hides the dialog and, when it was opened through `?add=1`, rewrites the URL
/// without the flag while keeping `q`.
fn close_dialog(component: &mut ListingComponent, ctx: &Context<ListingComponent>) {
    component.dialog_open = false;

    let link = ctx.link();
    let Some(query) = link
        .location()
        .and_then(|location| location.query::<ViewQuery>().ok())
    else {
        return;
    };
    if !query.wants_add_dialog() {
        return;
    }
    if let Some(navigator) = link.navigator() {
        if let Err(err) = navigator.push_with_query(&Route::Listing, &query.without_add()) {
            gloo_console::error!(format!("could not update the URL: {:?}", err));
        }
    }
}
