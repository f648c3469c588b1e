//! # Host routes
//!
//! - `/api/{tail}`: any method, forwarded to the configured upstream API
//!   (`proxy`).
//! - everything else: the embedded single-page app, with unknown paths
//!   answered by `index.html` so client-side routes survive a reload
//!   (`static_files`).

pub mod proxy;
pub mod static_files;

use actix_web::web;

pub use proxy::ProxyState;

/// The base path the front-end calls the API through.
const API_PATH: &str = "/api";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PATH).route("/{tail:.*}", web::route().to(proxy::forward)))
        .default_service(web::route().to(static_files::serve_embedded));
}
