//! Operator screen: paged car table with search, page size selector and the
//! add/edit/delete actions.
//!
//! Runs the same `ListController` as the listing in replace mode: each page
//! swaps the rows shown. Writes go through the Car Directory Service and are
//! followed by a reload from the server, never by a local patch.

use common::requests::ViewQuery;
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{FormTarget, ManageComponent};

use crate::components::spawn_car_fetch;

impl Component for ManageComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let term = ctx
            .link()
            .location()
            .and_then(|location| location.query::<ViewQuery>().ok())
            .unwrap_or_default()
            .term()
            .to_string();
        let mut component = ManageComponent::new(term);
        component.location_listener = ctx.link().add_location_listener(
            ctx.link()
                .callback(|location: Location| Msg::QueryChanged(location.query::<ViewQuery>().unwrap_or_default())),
        );
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let term = self.url_term.clone();
            self.debouncer.sync(term.as_str());
            let ticket = self.list.search(term);
            spawn_car_fetch(ctx.link(), ticket, Msg::Fetched);
        }
    }
}
