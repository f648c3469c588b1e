//! Single car page for `/Cars/CarInfo/:id`.

use common::error::ApiError;
use common::model::car::CarDetail;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::format_price;
use crate::config::PLACEHOLDER_IMAGE;
use crate::notify::notify_error;
use crate::router::Route;
use crate::services::cars;

#[derive(Properties, PartialEq, Clone)]
pub struct CarDetailProps {
    pub id: u64,
}

pub enum Msg {
    Loaded(u64, Result<CarDetail, ApiError>),
}

pub enum DetailState {
    Loading,
    Ready(CarDetail),
    Failed(ApiError),
}

pub struct CarDetailComponent {
    state: DetailState,
}

impl CarDetailComponent {
    fn fetch(ctx: &Context<Self>) {
        let id = ctx.props().id;
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = cars::get_by_id(id).await;
            link.send_message(Msg::Loaded(id, outcome));
        });
    }
}

impl Component for CarDetailComponent {
    type Message = Msg;
    type Properties = CarDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch(ctx);
        Self {
            state: DetailState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(id, outcome) => {
                // The route moved on to another car while this one was loading.
                if id != ctx.props().id {
                    return false;
                }
                self.state = match outcome {
                    Ok(car) => DetailState::Ready(car),
                    Err(err) => {
                        notify_error("Failed to load car", &err);
                        DetailState::Failed(err)
                    }
                };
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id == old_props.id {
            return false;
        }
        self.state = DetailState::Loading;
        Self::fetch(ctx);
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            DetailState::Loading => html! { <div class="loading">{"Loading car…"}</div> },
            DetailState::Failed(err) if err.is_not_found() => {
                html! { <div class="empty">{"Car not found."}</div> }
            }
            DetailState::Failed(err) => {
                html! { <div class="error">{ format!("Could not load this car: {}", err) }</div> }
            }
            DetailState::Ready(car) => car_view(car),
        };

        html! {
            <section class="car-detail">
                <Link<Route> to={Route::Listing}>{"← Back to cars"}</Link<Route>>
                { body }
            </section>
        }
    }
}

fn car_view(car: &CarDetail) -> Html {
    let image = car
        .image_data_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    html! {
        <article>
            <img src={image} alt={car.title()} />
            <h2>{ car.title() }</h2>
            <div class="price">{ format_price(car.price) }</div>
            <p>{ car.description.clone().unwrap_or_else(|| "No description.".to_string()) }</p>
        </article>
    }
}
