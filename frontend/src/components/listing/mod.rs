//! Public listing screen: search box, card grid with "load more", and the
//! add-car dialog.
//!
//! Responsibilities
//! - Drive an accumulating `ListController`: a new search term starts over
//!   from page 1, "load more" appends the next batch.
//! - Debounce typed search terms; a `?q=` in the URL is searched right away.
//! - Open the add-car dialog for `?add=1` and drop the flag from the URL when
//!   the dialog closes.

use common::requests::ViewQuery;
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ListingComponent;

use crate::components::spawn_car_fetch;

impl Component for ListingComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let query = current_query(ctx);
        let mut component = ListingComponent::new(&query);
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

fn current_query(ctx: &Context<ListingComponent>) -> ViewQuery {
    ctx.link()
        .location()
        .and_then(|location| location.query::<ViewQuery>().ok())
        .unwrap_or_default()
}
