//! Payment Service: plain CRUD passthrough to `/PaymentDetails`.

use common::error::ApiError;
use common::model::payment::{CreatePayment, PaymentDetails};
use common::requests::endpoints;
use gloo_net::http::Request;

use super::{check, read_json, transport};
use crate::config::api_url;

pub async fn submit(payment: &CreatePayment) -> Result<PaymentDetails, ApiError> {
    let response = Request::post(&api_url(endpoints::PAYMENT_DETAILS))
        .json(payment)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn list() -> Result<Vec<PaymentDetails>, ApiError> {
    let response = Request::get(&api_url(endpoints::PAYMENT_DETAILS))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn get_by_id(id: u64) -> Result<PaymentDetails, ApiError> {
    let response = Request::get(&api_url(&endpoints::payment_detail(id)))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

/// Answers with the record as stored after the update.
pub async fn update(id: u64, payment: &CreatePayment) -> Result<PaymentDetails, ApiError> {
    let response = Request::put(&api_url(&endpoints::payment_detail(id)))
        .json(payment)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

pub async fn delete(id: u64) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&endpoints::payment_detail(id)))
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}
