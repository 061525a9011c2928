use std::sync::Arc;

use crate::services::{presenter::Presenter, transit_service::route_downloader::RouteDownloader};

#[derive(Clone)]
pub struct AppState {
    pub route_downloader: RouteDownloader,
    pub presenter: Arc<dyn Presenter>,
}
