use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, respond::respond},
};
use axum::{extract::State, http::HeaderMap, response::Response};
#[cfg(test)]
use axum_macros::debug_handler;

#[cfg_attr(test, debug_handler)]
pub async fn get_transit_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let rendered = state.route_downloader.list_routes().await;

    respond(&headers, state.presenter.as_ref(), "MBTA Routes", rendered)
}
