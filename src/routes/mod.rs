use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_transit_routes;
mod get_transit_schedule;
mod get_transit_stops_for_route;

pub fn apply_routes(app: Router<AppState>, base_path: &str) -> Router<AppState> {
    app.route(
        &format!("{}/routes", base_path),
        get(get_transit_routes::get_transit_routes),
    )
    .route(
        &format!("{}/route", base_path),
        get(get_transit_stops_for_route::get_transit_stops_without_route),
    )
    .route(
        &format!("{}/route/:name", base_path),
        get(get_transit_stops_for_route::get_transit_stops_for_route),
    )
    .route(
        &format!("{}/schedule/:route", base_path),
        get(get_transit_schedule::get_transit_schedule_without_stop),
    )
    .route(
        &format!("{}/schedule/:route/:stop", base_path),
        get(get_transit_schedule::get_transit_schedule),
    )
}
