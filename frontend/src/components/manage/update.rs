use common::forms::car::CarForm;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{FormTarget, ManageComponent};
use crate::components::spawn_car_fetch;
use crate::config::SEARCH_QUIET_MS;
use crate::notify::{confirm, notify_error, notify_info};
use crate::services::cars;

pub fn update(component: &mut ManageComponent, ctx: &Context<ManageComponent>, msg: Msg) -> bool {
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
            if query.term() == component.url_term {
                return false;
            }
            component.url_term = query.term().to_string();
            component.search_input = component.url_term.clone();
            component.debouncer.sync(component.url_term.as_str());
            let ticket = component.list.search(component.url_term.clone());
            spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
            true
        }
        Msg::ChangePage(delta) => match component.list.change_page(delta) {
            Some(ticket) => {
                spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
                true
            }
            None => false,
        },
        Msg::ChangePageSize(size) => {
            if size == component.list.page_size() {
                return false;
            }
            let ticket = component.list.change_page_size(size);
            spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
            true
        }
        Msg::Fetched(ticket, outcome) => match outcome {
            Ok(page) => {
                if !component.list.complete(&ticket, page) {
                    return false;
                }
                // Deleting the last row of the last page leaves us past the end.
                if let Some(ticket) = component.list.clamp_page() {
                    spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
                }
                true
            }
            Err(err) => {
                let current = component.list.fail(&ticket);
                if current {
                    notify_error("Failed to load cars", err);
                }
                current
            }
        },
        Msg::OpenAdd => {
            component.form_initial = CarForm::default();
            component.dialog = Some(FormTarget::Create);
            true
        }
        Msg::OpenEdit(car) => {
            component.form_initial = CarForm::from_item(&car);
            component.dialog = Some(FormTarget::Update(car.id));
            true
        }
        Msg::CloseDialog => {
            component.dialog = None;
            true
        }
        Msg::Submit(submission) => {
            let Some(target) = component.dialog else {
                return false;
            };
            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let image = submission.image.as_ref();
                let outcome = match target {
                    FormTarget::Create => cars::create(&submission.fields, image).await,
                    FormTarget::Update(id) => cars::update(id, &submission.fields, image).await,
                };
                match outcome {
                    Ok(()) => link.send_message(Msg::Saved(target)),
                    Err(err) => link.send_message(Msg::SaveFailed(target, err)),
                }
            });
            true
        }
        Msg::Saved(target) => {
            component.saving = false;
            component.dialog = None;
            let ticket = match target {
                FormTarget::Create => {
                    notify_info("Car added.");
                    component.list.reset()
                }
                FormTarget::Update(_) => {
                    notify_info("Car updated.");
                    component.list.reload()
                }
            };
            spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
            true
        }
        Msg::SaveFailed(target, err) => {
            component.saving = false;
            let context = match target {
                FormTarget::Create => "Failed to add car",
                FormTarget::Update(_) => "Failed to update",
            };
            notify_error(context, err);
            true
        }
        Msg::ConfirmDelete(car) => {
            if !confirm(&format!("Delete \"{}\"?", car.title())) {
                return false;
            }
            let id = car.id;
            let link = ctx.link().clone();
            spawn_local(async move {
                match cars::delete(id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(err) => link.send_message(Msg::DeleteFailed(err)),
                }
            });
            false
        }
        Msg::Deleted(_) => {
            notify_info("Car deleted.");
            let ticket = component.list.reload();
            spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
            true
        }
        Msg::DeleteFailed(err) => {
            notify_error("Failed to delete", err);
            false
        }
    }
}

/// Reads the chosen page size out of the `<select>`.
pub fn selected_page_size(e: &Event) -> Option<u32> {
    e.target_unchecked_into::<HtmlSelectElement>()
        .value()
        .parse()
        .ok()
}

fn schedule_search(component: &mut ManageComponent, ctx: &Context<ManageComponent>, term: String) {
    let ticket = component.debouncer.input(term);
    let link = ctx.link().clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SEARCH_QUIET_MS).await;
        link.send_message(Msg::SearchSettled(ticket));
    });
}
