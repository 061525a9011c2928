use std::sync::Arc;

use chrono::Duration;

use crate::{
    routes::apply_routes,
    services::{
        presenter::html_presenter::{HtmlPresenter, DEFAULT_BASE_PATH},
        transit_service::{
            config::{
                EndpointConfig, TransitServiceConfig, DEFAULT_MBTA_HOST,
                DEFAULT_SCHEDULE_WINDOW_MINUTES,
            },
            route_downloader::RouteDownloader,
        },
    },
    types::app_state::AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub struct AppConfig {
    pub mbta_host: String,
    pub mbta_api_key: Option<String>,
    pub base_path: String,
    pub schedule_window_minutes: i64,
}

impl AppConfig {
    pub fn for_host(mbta_host: String) -> Self {
        AppConfig {
            mbta_host,
            mbta_api_key: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
            schedule_window_minutes: DEFAULT_SCHEDULE_WINDOW_MINUTES,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_host(DEFAULT_MBTA_HOST.to_string())
    }
}

/// `transit/` and `/transit` both mount under `/transit`; empty mounts at the root.
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::new();
    let base_path = normalize_base_path(&config.base_path);

    let endpoints = EndpointConfig::new(config.mbta_host).with_api_key(config.mbta_api_key);
    let transit_config = TransitServiceConfig::new(endpoints)
        .with_schedule_window(Duration::minutes(config.schedule_window_minutes));
    let state = AppState {
        route_downloader: RouteDownloader::from_config(transit_config),
        presenter: Arc::new(HtmlPresenter::new(&base_path)),
    };

    apply_routes(Router::new(), &base_path)
        .route("/health", get(health))
        .layer(cors_middleware)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
