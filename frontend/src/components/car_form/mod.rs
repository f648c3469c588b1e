//! Add/edit car dialog shared by the listing and management screens.
//!
//! The dialog owns the transient form model, the "submitted" flag that turns
//! on inline invalid markers, and the optional picture picked for upload with
//! its preview. It never talks to the API: a form that passes validation is
//! handed to the parent through `on_submit` as a [`CarSubmission`].

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CarFormProps;
pub use state::CarFormDialog;

use common::forms::car::CarFields;

/// A validated form plus the picture to attach, if any.
#[derive(Clone)]
pub struct CarSubmission {
    pub fields: CarFields,
    pub image: Option<web_sys::File>,
}

impl Component for CarFormDialog {
    type Message = Msg;
    type Properties = CarFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        CarFormDialog::new(&ctx.props().initial)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let reopened = props.open && !old_props.open;
        if reopened || props.initial != old_props.initial {
            self.reset(&props.initial);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
