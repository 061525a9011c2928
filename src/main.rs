mod app;
mod routes;
mod services;
mod types;
mod utils;
use std::env;
use tracing::info;

use crate::{
    app::AppConfig,
    services::{
        presenter::html_presenter::DEFAULT_BASE_PATH,
        transit_service::config::{DEFAULT_MBTA_HOST, DEFAULT_SCHEDULE_WINDOW_MINUTES},
    },
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    // routes:    https://api-v3.mbta.com/routes
    // stops:     https://api-v3.mbta.com/stops?include=route&filter[route]={ROUTE}
    // schedules: https://api-v3.mbta.com/schedules?include=route,direction_id&filter[route]={ROUTE}&filter[stop]={STOP}&filter[min_time]={HH:MM}&filter[direction_id]={0|1}
    let config = AppConfig {
        mbta_host: env::var("MBTA_HOST").unwrap_or_else(|_| DEFAULT_MBTA_HOST.to_string()),
        mbta_api_key: env::var("MBTA_API_KEY").ok(),
        base_path: env::var("MBTA_BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
        schedule_window_minutes: env::var("MBTA_SCHEDULE_WINDOW_MINUTES")
            .ok()
            .and_then(|m| m.parse().ok())
            .filter(|m| (0..=24 * 60).contains(m))
            .unwrap_or(DEFAULT_SCHEDULE_WINDOW_MINUTES),
    };
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    if config.mbta_api_key.is_none() {
        info!("MBTA_API_KEY not set, requests will use the anonymous rate limit");
    }

    let app = app::gen_app(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await
}
