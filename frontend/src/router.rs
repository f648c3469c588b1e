//! Client-side routes. Unknown paths, including a non-numeric car id, land
//! on the listing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::car_detail::CarDetailComponent;
use crate::components::listing::ListingComponent;
use crate::components::manage::ManageComponent;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    /// Accepts `?q=` and `?add=1`.
    #[at("/listing")]
    Listing,
    /// Accepts `?q=`.
    #[at("/manage")]
    Manage,
    #[at("/Cars/CarInfo/:id")]
    CarInfo { id: u64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Listing => html! { <ListingComponent /> },
        Route::Manage => html! { <ManageComponent /> },
        Route::CarInfo { id } => html! { <CarDetailComponent {id} /> },
        Route::Home | Route::NotFound => html! { <Redirect<Route> to={Route::Listing} /> },
    }
}
