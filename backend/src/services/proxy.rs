//! # API pass-through
//!
//! The SPA talks to `/api/...` on its own origin; this module forwards each
//! such request to `{upstream}/{tail}?{query}` and relays the answer. Method,
//! body, `Content-Type` and `Accept` travel upstream unchanged; status, body
//! and `Content-Type` travel back. Nothing is retried or cached.

use actix_web::http::header::{ACCEPT, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use uuid::Uuid;

use super::API_PATH;
use crate::error::HostError;

/// Shared by all workers: one pooled HTTP client plus the upstream base URL.
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub upstream: Option<String>,
}

impl ProxyState {
    pub fn new(upstream: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }
}

/// `{base}/{tail}` with the original query string, if any.
pub fn upstream_url(base: &str, tail: &str, query: &str) -> String {
    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        tail.trim_start_matches('/')
    );
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<ProxyState>,
) -> Result<HttpResponse, HostError> {
    let request_id = Uuid::new_v4();
    let base = state.upstream.as_deref().ok_or(HostError::NoUpstream)?;
    // Raw path, so percent-encoded segments reach the upstream untouched.
    let tail = req.path().strip_prefix(API_PATH).unwrap_or(req.path());
    let target = upstream_url(base, tail, req.query_string());

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| HostError::Method(req.method().to_string()))?;

    let mut outgoing = state.client.request(method, &target);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = req.headers().get(&name).and_then(|v| v.to_str().ok()) {
            outgoing = outgoing.header(name.as_str(), value);
        }
    }
    if !body.is_empty() {
        outgoing = outgoing.body(body);
    }

    let upstream = outgoing.send().await.map_err(|e| {
        warn!("[{}] {} {} failed: {}", request_id, req.method(), target, e);
        HostError::Unreachable(e.to_string())
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let payload = upstream.bytes().await.map_err(|e| {
        warn!("[{}] reading the answer of {} failed: {}", request_id, target, e);
        HostError::Unreachable(e.to_string())
    })?;

    info!("[{}] {} {} -> {}", request_id, req.method(), target, status.as_u16());

    let mut response = HttpResponse::build(status);
    response.insert_header(("X-Request-Id", request_id.to_string()));
    if let Some(content_type) = content_type {
        response.content_type(content_type);
    }
    Ok(response.body(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[::core::prelude::v1::test]
    fn joins_base_tail_and_query() {
        assert_eq!(
            upstream_url("https://cars.example.com/api/", "Cars", "q=&page=1&pageSize=9"),
            "https://cars.example.com/api/Cars?q=&page=1&pageSize=9"
        );
        assert_eq!(
            upstream_url("http://localhost:5000", "Cars/CarInfo-7", ""),
            "http://localhost:5000/Cars/CarInfo-7"
        );
    }

    #[::core::prelude::v1::test]
    fn keeps_encoded_segments() {
        assert_eq!(
            upstream_url("http://api", "Cars/AddCar-Alfa%20Romeo-Giulia", ""),
            "http://api/Cars/AddCar-Alfa%20Romeo-Giulia"
        );
    }

    #[actix_web::test]
    async fn without_upstream_answers_503() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ProxyState::new(None)))
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/Cars?q=&page=1&pageSize=9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn unreachable_upstream_answers_502() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ProxyState::new(Some("http://127.0.0.1:9".into()))))
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/Cars/DeleteCar-3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
