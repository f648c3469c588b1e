use common::model::car::CarListItem;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{FormTarget, ManageComponent};
use super::update::selected_page_size;
use crate::components::car_form::{CarFormDialog, CarSubmission};
use crate::components::format_price;
use crate::config::PAGE_SIZE_CHOICES;

pub fn view(component: &ManageComponent, ctx: &Context<ManageComponent>) -> Html {
    let link = ctx.link();
    let (title, submit_label) = match component.dialog {
        Some(FormTarget::Update(_)) => ("Edit car", "Save changes"),
        _ => ("Add a car", "Add car"),
    };

    html! {
        <section>
            { build_toolbar(component, link) }
            { build_table(component, link) }
            { build_pager(component, link) }

            <CarFormDialog
                open={component.dialog.is_some()}
                {title}
                {submit_label}
                initial={component.form_initial.clone()}
                busy={component.saving}
                on_submit={link.callback(|submission: CarSubmission| Msg::Submit(submission))}
                on_close={link.callback(|_: ()| Msg::CloseDialog)}
            />
        </section>
    }
}

fn build_toolbar(component: &ManageComponent, link: &Scope<ManageComponent>) -> Html {
    html! {
        <div class="toolbar">
            <input
                type="search"
                placeholder="Search cars"
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
            <button onclick={link.callback(|_| Msg::OpenAdd)}>
                <i class="material-icons">{"add"}</i>
                {"Add car"}
            </button>
        </div>
    }
}

fn build_table(component: &ManageComponent, link: &Scope<ManageComponent>) -> Html {
    let list = &component.list;
    let body = if list.items().is_empty() {
        let text = if list.loading() { "Loading cars…" } else { "No cars found." };
        html! { <tr><td colspan="5" class="empty">{ text }</td></tr> }
    } else {
        list.items().iter().map(|car| car_row(car, link)).collect::<Html>()
    };

    html! {
        <table class="cars">
            <thead>
                <tr>
                    <th>{"Company"}</th>
                    <th>{"Model"}</th>
                    <th>{"Price"}</th>
                    <th>{"Description"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn car_row(car: &CarListItem, link: &Scope<ManageComponent>) -> Html {
    let edit = car.clone();
    let remove = car.clone();

    html! {
        <tr key={car.id}>
            <td>{ car.company.clone() }</td>
            <td>{ car.model.clone() }</td>
            <td>{ format_price(car.price) }</td>
            <td>{ car.description.clone().unwrap_or_default() }</td>
            <td class="actions">
                <button onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                    <i class="material-icons">{"edit"}</i>
                </button>
                <button onclick={link.callback(move |_| Msg::ConfirmDelete(remove.clone()))}>
                    <i class="material-icons">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}

fn build_pager(component: &ManageComponent, link: &Scope<ManageComponent>) -> Html {
    let list = &component.list;
    let page_size = list.page_size();

    html! {
        <div class="pager">
            <button
                disabled={list.loading() || list.page() <= 1}
                onclick={link.callback(|_| Msg::ChangePage(-1))}
            >
                {"Previous"}
            </button>
            <span>{ format!("Page {} of {}", list.page(), list.total_pages()) }</span>
            <button
                disabled={list.loading() || !list.has_more()}
                onclick={link.callback(|_| Msg::ChangePage(1))}
            >
                {"Next"}
            </button>
            <label>
                {"Rows per page"}
                <select onchange={link.batch_callback(|e: Event| selected_page_size(&e).map(Msg::ChangePageSize))}>
                    { for PAGE_SIZE_CHOICES.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == page_size}>
                            { size.to_string() }
                        </option>
                    }) }
                </select>
            </label>
            <span>{ format!("{} cars", list.total()) }</span>
        </div>
    }
}
