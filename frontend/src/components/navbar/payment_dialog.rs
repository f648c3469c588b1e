use common::forms::payment::{PaymentField, PaymentFieldError};
use common::model::payment::PaymentSummary;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::{Msg, Navbar};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(navbar: &Navbar, errors: &[PaymentFieldError], link: &Scope<Navbar>) -> Html {
    let form = &navbar.form;
    let (title, submit_label) = match navbar.editing {
        Some(_) => ("Edit payment details", "Save changes"),
        None => ("Payment details", "Save"),
    };

    html! {
        <TopSheet open={navbar.open} on_dismiss={link.callback(|_: ()| Msg::Close)}>
            <h2>{ title }</h2>
            { saved_cards(&navbar.saved_cards, navbar.editing, link) }

            { field(link, errors, PaymentField::CardHolder, "Card holder", "text", "Name on the card", &form.card_holder) }
            { field(link, errors, PaymentField::CardNumber, "Card number", "text", "16 digits", &form.card_number) }
            { field(link, errors, PaymentField::ExpDate, "Expiry", "text", "MM/YY", &form.exp_date) }
            { field(link, errors, PaymentField::Cvv, "CVV", "password", "3 digits", &form.cvv) }

            <div class="actions">
                if navbar.editing.is_some() {
                    <button type="button" onclick={link.callback(|_| Msg::CancelEdit)}>{"New card"}</button>
                }
                <button type="button" onclick={link.callback(|_| Msg::Close)}>{"Cancel"}</button>
                <button type="button" disabled={navbar.saving} onclick={link.callback(|_| Msg::Submit)}>
                    { submit_label }
                </button>
            </div>
        </TopSheet>
    }
}

fn saved_cards(cards: &[PaymentSummary], editing: Option<u64>, link: &Scope<Navbar>) -> Html {
    if cards.is_empty() {
        return html! {};
    }

    html! {
        <ul class="saved-cards">
            { for cards.iter().map(|card| {
                let id = card.payment_id;
                let remove = card.clone();
                html! {
                    <li key={id} class={classes!((editing == Some(id)).then_some("editing"))}>
                        <span>{ format!("{} {} ({})", card.card_holder, card.masked_number, card.exp_date) }</span>
                        <button type="button" onclick={link.callback(move |_| Msg::Edit(id))}>
                            <i class="material-icons">{"edit"}</i>
                        </button>
                        <button type="button" onclick={link.callback(move |_| Msg::Delete(remove.clone()))}>
                            <i class="material-icons">{"delete"}</i>
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

fn field(
    link: &Scope<Navbar>,
    errors: &[PaymentFieldError],
    which: PaymentField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let error = errors.iter().find(|e| e.field() == which);
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Set(which, e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <label>
            { label }
            <input
                type={kind}
                autocomplete="off"
                {placeholder}
                class={classes!(error.is_some().then_some("invalid"))}
                value={value.to_string()}
                {oninput}
            />
            {
                match error {
                    Some(error) => html! { <div class="hint">{ error.to_string() }</div> },
                    None => html! {},
                }
            }
        </label>
    }
}
