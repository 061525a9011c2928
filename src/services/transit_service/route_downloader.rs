//! Fetch, decode and tabulate MBTA data for the three transit pages.
//!
//! Every failure collapses into an [`ErrorPlaceholder`]; the cause is only
//! logged.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveTime};
use tracing::{error, info, warn};
use validator::Validate;

use crate::types::{
    mbta_json_api::{RouteAttributes, ScheduleAttributes, StopAttributes},
    rendered::{ErrorPlaceholder, Rendered},
    table_view::{RouteTables, ScheduleTables, TableView},
};

use super::{
    config::TransitServiceConfig,
    decoder::decode,
    table_builder::{build_route_tables, build_schedule_table, build_stop_table},
    transport::{HttpTransport, ScheduleQuery, TransitTransport},
    types::{direction::Direction, transit_service_error::TransitServiceError},
};

#[derive(Validate)]
struct RouteStopsRequest {
    #[validate(length(min = 1, message = "route id must not be empty"))]
    route_id: String,
}

#[derive(Validate)]
struct RouteScheduleRequest {
    #[validate(length(min = 1, message = "route id must not be empty"))]
    route_id: String,
    #[validate(length(min = 1, message = "stop id must not be empty"))]
    stop_id: String,
}

/// Earliest schedule time to ask for: `window` before `now`, as `HH:MM`.
///
/// Pure time-of-day arithmetic, so shortly after midnight this wraps to
/// the previous evening.
pub fn min_time_filter(now: NaiveTime, window: Duration) -> String {
    let (earliest, _) = now.overflowing_sub_signed(window);
    earliest.format("%H:%M").to_string()
}

/// Source of the current time of day for the schedule window.
pub type Clock = Arc<dyn Fn() -> NaiveTime + Send + Sync>;

#[derive(Clone)]
pub struct RouteDownloader<T = HttpTransport> {
    transport: T,
    config: TransitServiceConfig,
    clock: Clock,
}

impl RouteDownloader<HttpTransport> {
    pub fn from_config(config: TransitServiceConfig) -> Self {
        let transport = HttpTransport::new(config.endpoints.clone());
        Self::new(transport, config)
    }
}

impl<T: TransitTransport> RouteDownloader<T> {
    pub fn new(transport: T, config: TransitServiceConfig) -> Self {
        Self {
            transport,
            config,
            clock: Arc::new(|| Local::now().time()),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> NaiveTime + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    fn collapse(
        &self,
        operation: &str,
        err: TransitServiceError,
        message: &str,
    ) -> ErrorPlaceholder {
        if matches!(err, TransitServiceError::Validation(_)) {
            warn!("Rejected {} request: {}", operation, err);
        } else {
            error!("Failed to {}: {}", operation, err);
        }
        ErrorPlaceholder::new(message)
    }

    /// All routes, one table per route description.
    pub async fn list_routes(&self) -> Rendered<RouteTables> {
        self.fetch_route_tables()
            .await
            .map_err(|e| self.collapse("list routes", e, &self.config.messages.default))
            .into()
    }

    async fn fetch_route_tables(&self) -> Result<RouteTables, TransitServiceError> {
        let body = self.transport.fetch_routes().await?;
        let document = decode::<RouteAttributes>(&body)?;
        let tables = build_route_tables(&document);
        info!(
            "Built {} route tables from {} routes",
            tables.groups.len(),
            document.data.len()
        );
        Ok(tables)
    }

    /// Stops served by `route_id`, each linking to its schedule.
    pub async fn route_stops(&self, route_id: &str) -> Rendered<TableView> {
        let request = RouteStopsRequest {
            route_id: route_id.to_string(),
        };
        if let Err(e) = request.validate() {
            return Rendered::Error(self.collapse(
                "list stops",
                e.into(),
                &self.config.messages.missing_route,
            ));
        }

        self.fetch_stop_table(route_id)
            .await
            .map_err(|e| self.collapse("list stops", e, &self.config.messages.default))
            .into()
    }

    async fn fetch_stop_table(&self, route_id: &str) -> Result<TableView, TransitServiceError> {
        let body = self.transport.fetch_stops(route_id).await?;
        let document = decode::<StopAttributes>(&body)?;
        Ok(build_stop_table(&document, route_id)?)
    }

    /// Upcoming schedules at a stop, one table per direction.
    ///
    /// If either direction fails the whole result is the placeholder.
    pub async fn route_schedule(&self, route_id: &str, stop_id: &str) -> Rendered<ScheduleTables> {
        let request = RouteScheduleRequest {
            route_id: route_id.to_string(),
            stop_id: stop_id.to_string(),
        };
        if let Err(e) = request.validate() {
            return Rendered::Error(self.collapse(
                "list schedules",
                e.into(),
                &self.config.messages.default,
            ));
        }

        let min_time = min_time_filter((self.clock)(), self.config.schedule_window);

        self.fetch_schedule_tables(route_id, stop_id, &min_time)
            .await
            .map_err(|e| self.collapse("list schedules", e, &self.config.messages.no_schedule))
            .into()
    }

    async fn fetch_schedule_tables(
        &self,
        route_id: &str,
        stop_id: &str,
        min_time: &str,
    ) -> Result<ScheduleTables, TransitServiceError> {
        let direction0 = self
            .fetch_schedule_table(route_id, stop_id, min_time, Direction::Zero)
            .await?;
        let direction1 = self
            .fetch_schedule_table(route_id, stop_id, min_time, Direction::One)
            .await?;

        Ok(ScheduleTables {
            direction0,
            direction1,
        })
    }

    async fn fetch_schedule_table(
        &self,
        route_id: &str,
        stop_id: &str,
        min_time: &str,
        direction: Direction,
    ) -> Result<TableView, TransitServiceError> {
        let body = self
            .transport
            .fetch_schedules(&ScheduleQuery {
                route_id,
                stop_id,
                min_time,
                direction,
            })
            .await?;
        let document = decode::<ScheduleAttributes>(&body)?;
        Ok(build_schedule_table(&document, route_id, stop_id, direction)?)
    }
}
