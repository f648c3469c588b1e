use common::model::car::CarListItem;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ListingComponent;
use crate::components::car_form::{CarFormDialog, CarSubmission};
use crate::components::format_price;
use crate::config::PLACEHOLDER_IMAGE;

pub fn view(component: &ListingComponent, ctx: &Context<ListingComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section>
            { build_toolbar(component, link) }
            { build_grid(component, link) }
            { build_footer(component, link) }

            <CarFormDialog
                open={component.dialog_open}
                title="Add a car"
                submit_label="Add car"
                busy={component.saving}
                on_submit={link.callback(|submission: CarSubmission| Msg::SubmitCar(submission))}
                on_close={link.callback(|_: ()| Msg::CloseDialog)}
            />
        </section>
    }
}

fn build_toolbar(component: &ListingComponent, link: &Scope<ListingComponent>) -> Html {
    html! {
        <div class="toolbar">
            <input
                type="search"
                placeholder="Search by company, model or description"
                value={component.search_input.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button
                disabled={component.search_input.is_empty()}
                onclick={link.callback(|_| Msg::ClearSearch)}
            >
                {"Clear"}
            </button>
            <button onclick={link.callback(|_| Msg::OpenDialog)}>
                <i class="material-icons">{"add"}</i>
                {"Add car"}
            </button>
        </div>
    }
}

fn build_grid(component: &ListingComponent, link: &Scope<ListingComponent>) -> Html {
    let list = &component.list;
    if list.items().is_empty() {
        return if list.loading() {
            html! { <div class="loading">{"Loading cars…"}</div> }
        } else {
            html! { <div class="empty">{"No cars found."}</div> }
        };
    }

    html! {
        <div class="card-grid">
            { for list.items().iter().map(|car| car_card(car, link)) }
        </div>
    }
}

fn car_card(car: &CarListItem, link: &Scope<ListingComponent>) -> Html {
    let id = car.id;
    let image = car
        .image_data_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    html! {
        <article class="car-card" key={id} onclick={link.callback(move |_| Msg::ShowDetail(id))}>
            <img src={image} alt={car.title()} loading="lazy" />
            <div class="body">
                <h3>{ car.title() }</h3>
                <div class="price">{ format_price(car.price) }</div>
                {
                    match &car.description {
                        Some(description) => html! { <p>{ description.clone() }</p> },
                        None => html! {},
                    }
                }
            </div>
        </article>
    }
}

fn build_footer(component: &ListingComponent, link: &Scope<ListingComponent>) -> Html {
    let list = &component.list;
    if !list.has_more() {
        return html! {};
    }

    html! {
        <div class="pager">
            <span>{ format!("Showing {} of {}", list.items().len(), list.total()) }</span>
            <button
                disabled={!list.can_load_more()}
                onclick={link.callback(|_| Msg::LoadMore)}
            >
                { if list.loading() { "Loading…" } else { "Load more" } }
            </button>
        </div>
    }
}
