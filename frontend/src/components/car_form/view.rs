use common::forms::car::{CarField, CarFieldError};
use web_sys::HtmlInputElement;
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CarFormDialog;
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(component: &CarFormDialog, ctx: &Context<CarFormDialog>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let errors = if component.draft.submitted() {
        component.draft.errors()
    } else {
        Vec::new()
    };

    html! {
        <TopSheet open={props.open} on_dismiss={link.callback(|_: ()| Msg::Close)}>
            <h2>{ props.title.clone() }</h2>

            { text_input(
                component,
                "Company",
                component.draft.form.company.clone(),
                CarField::Company,
                link.callback(|e: InputEvent| Msg::SetCompany(input_value(&e))),
            ) }
            { text_input(
                component,
                "Model",
                component.draft.form.model.clone(),
                CarField::Model,
                link.callback(|e: InputEvent| Msg::SetModel(input_value(&e))),
            ) }

            <label>
                {"Price"}
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    class={classes!(component.draft.is_invalid(CarField::Price).then_some("invalid"))}
                    value={component.draft.form.price.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetPrice(input_value(&e)))}
                />
            </label>

            <label>
                {"Description"}
                <textarea
                    rows={3}
                    value={component.draft.form.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </label>

            { image_picker(component, link) }
            { error_hints(&errors) }

            <div class="actions">
                <button type="button" onclick={link.callback(|_| Msg::Close)}>{"Cancel"}</button>
                <button
                    type="button"
                    disabled={props.busy}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { props.submit_label.clone() }
                </button>
            </div>
        </TopSheet>
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn text_input(
    component: &CarFormDialog,
    label: &'static str,
    value: String,
    field: CarField,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <label>
            { label }
            <input
                type="text"
                class={classes!(component.draft.is_invalid(field).then_some("invalid"))}
                {value}
                {oninput}
            />
        </label>
    }
}

fn image_picker(component: &CarFormDialog, link: &Scope<CarFormDialog>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });

    html! {
        <div class="preview">
            <label>
                {"Image (optional)"}
                <input
                    type="file"
                    accept="image/*"
                    ref={component.file_input_ref.clone()}
                    {onchange}
                />
            </label>
            {
                match (component.draft.image(), component.draft.preview_url()) {
                    (Some(_), Some(url)) => html! {
                        <>
                            <img src={url.to_string()} alt="Selected image preview" />
                            <button type="button" onclick={link.callback(|_| Msg::ClearImage)}>
                                {"Remove image"}
                            </button>
                        </>
                    },
                    (Some(file), None) => html! { <span>{ format!("Reading {}…", file.name()) }</span> },
                    _ => html! {},
                }
            }
        </div>
    }
}

fn error_hints(errors: &[CarFieldError]) -> Html {
    errors
        .iter()
        .map(|error| html! { <div class="hint">{ error.to_string() }</div> })
        .collect::<Html>()
}
