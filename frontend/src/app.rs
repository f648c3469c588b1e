use crate::components::navbar::Navbar;
use crate::router::{switch, Route};
use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Navbar />
                <main class="page">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        }
    }
}
