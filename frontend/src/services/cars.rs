//! Car Directory Service.
//!
//! Mutating calls send the car as `multipart/form-data` with the text parts
//! `Company`, `Model`, `Price`, an optional `Description` and an optional
//! `Image` file part.

use common::error::ApiError;
use common::forms::car::CarFields;
use common::model::car::{CarDetail, CarListItem};
use common::model::paged::PagedResult;
use common::requests::endpoints;
use common::requests::CarQuery;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{browser_failure, check, encode_segment, read_json, transport};
use crate::config::api_url;

/// `GET /Cars?q=&page=&pageSize=`
pub async fn list(query: &CarQuery) -> Result<PagedResult<CarListItem>, ApiError> {
    let response = Request::get(&api_url(endpoints::CARS))
        .query(query.pairs())
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

/// `GET /Cars/CarInfo-{id}`; a missing car is `ApiError::NotFound`.
pub async fn get_by_id(id: u64) -> Result<CarDetail, ApiError> {
    let response = Request::get(&api_url(&endpoints::car_info(id)))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn create(fields: &CarFields, image: Option<&File>) -> Result<(), ApiError> {
    let path = endpoints::add_car(
        &encode_segment(&fields.company),
        &encode_segment(&fields.model),
    );
    let response = Request::post(&api_url(&path))
        .body(car_form_data(fields, image)?)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}

pub async fn update(id: u64, fields: &CarFields, image: Option<&File>) -> Result<(), ApiError> {
    let path = endpoints::update_car(
        id,
        &encode_segment(&fields.company),
        &encode_segment(&fields.model),
    );
    let response = Request::put(&api_url(&path))
        .body(car_form_data(fields, image)?)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&endpoints::delete_car(id)))
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}

fn car_form_data(fields: &CarFields, image: Option<&File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(browser_failure)?;
    form.append_with_str("Company", &fields.company)
        .map_err(browser_failure)?;
    form.append_with_str("Model", &fields.model)
        .map_err(browser_failure)?;
    form.append_with_str("Price", &fields.price.to_string())
        .map_err(browser_failure)?;
    if let Some(description) = &fields.description {
        form.append_with_str("Description", description)
            .map_err(browser_failure)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("Image", file, &file.name())
            .map_err(browser_failure)?;
    }
    Ok(form)
}
