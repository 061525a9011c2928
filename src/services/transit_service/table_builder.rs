//! Reshapes decoded MBTA documents into display tables.

use chrono::DateTime;

use crate::types::{
    mbta_json_api::{
        Document, IncludedAttributes, Resource, RouteAttributes, ScheduleAttributes,
        StopAttributes,
    },
    table_view::{Cell, LinkDescriptor, RouteGroup, RouteTables, TableView, View},
};

use super::types::{direction::Direction, transit_service_error::DecodeError};

pub const ROUTE_HEADER: [&str; 3] = ["Route ID", "Full Name", "Directions"];
pub const STOP_HEADER: [&str; 3] = ["Stop ID", "Name", "Stop Address"];
pub const SCHEDULE_HEADER: [&str; 3] = ["Arrival Time", "Departure Time", "Schedule ID"];

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Groups routes by description, keeping the order in which each
/// description first appears.
pub fn build_route_tables(document: &Document<RouteAttributes>) -> RouteTables {
    let mut tables = RouteTables::default();

    for route in &document.data {
        let attributes = &route.attributes;
        let description = or_empty(&attributes.description);
        let directions = attributes
            .direction_names
            .iter()
            .flatten()
            .map(or_empty)
            .collect::<Vec<&str>>()
            .join(", ");
        let style = format!(
            "color: #{}; background-color: #{};",
            or_empty(&attributes.text_color),
            or_empty(&attributes.color)
        );

        let row = vec![
            Cell::link(LinkDescriptor::new(&route.id, View::RouteDetail).param("name", &route.id))
                .with_style(&style),
            Cell::text(or_empty(&attributes.long_name)).with_style(&style),
            Cell::text(directions).with_style(&style),
        ];

        match tables
            .groups
            .iter_mut()
            .find(|g| g.description == description)
        {
            Some(group) => group.table.push_row(row),
            None => {
                let mut table = TableView::new(description, &ROUTE_HEADER);
                table.push_row(row);
                tables.groups.push(RouteGroup {
                    description: description.to_string(),
                    table,
                });
            }
        }
    }

    tables
}

/// The first included resource is the route the stops or schedules belong to.
fn included_route(
    included: &[Resource<IncludedAttributes>],
) -> Result<&IncludedAttributes, DecodeError> {
    included
        .first()
        .map(|r| &r.attributes)
        .ok_or(DecodeError::MissingContext("included route"))
}

fn long_name(route: &IncludedAttributes) -> Result<&str, DecodeError> {
    route
        .long_name
        .as_deref()
        .ok_or(DecodeError::MissingContext("route long_name"))
}

pub fn build_stop_table(
    document: &Document<StopAttributes>,
    route_id: &str,
) -> Result<TableView, DecodeError> {
    let route = included_route(&document.included)?;
    let long_name = long_name(route)?;

    let mut table = TableView::new(
        format!("Route ID: {}, Long Name: {}", route_id, long_name),
        &STOP_HEADER,
    );

    for stop in &document.data {
        table.push_row(vec![
            Cell::link(
                LinkDescriptor::new(&stop.id, View::ScheduleDetail)
                    .param("route", route_id)
                    .param("stop", &stop.id),
            ),
            Cell::text(or_empty(&stop.attributes.name)),
            Cell::text(or_empty(&stop.attributes.address)),
        ]);
    }

    Ok(table)
}

/// MBTA times are RFC 3339 timestamps; only the wall-clock part is shown.
pub fn display_time(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => String::new(),
    }
}

pub fn build_schedule_table(
    document: &Document<ScheduleAttributes>,
    route_id: &str,
    stop_id: &str,
    direction: Direction,
) -> Result<TableView, DecodeError> {
    let route = included_route(&document.included)?;
    let long_name = long_name(route)?;
    let direction_name = route
        .direction_names
        .as_ref()
        .and_then(|names| names.get(direction.index()))
        .and_then(|name| name.as_deref())
        .ok_or(DecodeError::MissingContext("route direction_names"))?;

    let mut table = TableView::new(
        format!(
            "Route ID: {}, Long Name: {} at Stop ID: {} Going Direction: {}",
            route_id, long_name, stop_id, direction_name
        ),
        &SCHEDULE_HEADER,
    );

    for schedule in &document.data {
        table.push_row(vec![
            Cell::text(display_time(&schedule.attributes.arrival_time)),
            Cell::text(display_time(&schedule.attributes.departure_time)),
            Cell::text(&schedule.id),
        ]);
    }

    Ok(table)
}
