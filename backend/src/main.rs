mod config;
mod error;
mod services;

use crate::config::HostConfig;
use crate::services::ProxyState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    match &config.upstream {
        Some(upstream) => info!("Forwarding /api to {}", upstream),
        None => warn!("CAR_MARKET_UPSTREAM is not set; /api requests will answer 503"),
    }
    info!("Server running at {}", url);

    let proxy = web::Data::new(ProxyState::new(config.upstream.clone()));
    let body_limit = config.body_limit;

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(body_limit))
            .app_data(proxy.clone())
            .configure(services::configure)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
