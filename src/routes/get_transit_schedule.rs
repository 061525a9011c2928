use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, respond::respond},
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};

pub async fn get_transit_schedule(
    State(state): State<AppState>,
    Path((route, stop)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let rendered = state.route_downloader.route_schedule(&route, &stop).await;

    respond(&headers, state.presenter.as_ref(), "MBTA Schedule", rendered)
}

pub async fn get_transit_schedule_without_stop(
    State(state): State<AppState>,
    Path(route): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let rendered = state.route_downloader.route_schedule(&route, "").await;

    respond(&headers, state.presenter.as_ref(), "MBTA Schedule", rendered)
}
