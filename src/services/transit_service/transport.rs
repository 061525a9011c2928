use async_trait::async_trait;
use tracing::debug;

use super::{
    config::EndpointConfig,
    types::{direction::Direction, transit_service_error::TransportError},
};

pub struct ScheduleQuery<'a> {
    pub route_id: &'a str,
    pub stop_id: &'a str,
    pub min_time: &'a str,
    pub direction: Direction,
}

/// Raw access to the three MBTA endpoints this service reads.
#[async_trait]
pub trait TransitTransport: Send + Sync {
    async fn fetch_routes(&self) -> Result<String, TransportError>;

    async fn fetch_stops(&self, route_id: &str) -> Result<String, TransportError>;

    async fn fetch_schedules(&self, query: &ScheduleQuery<'_>) -> Result<String, TransportError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    config: EndpointConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, TransportError> {
        debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(url).query(query);
        if let Some(ref api_key) = self.config.api_key {
            request = request.header("x-api-key", api_key);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }
}

#[async_trait]
impl TransitTransport for HttpTransport {
    async fn fetch_routes(&self) -> Result<String, TransportError> {
        self.get(&self.config.routes_url(), &[]).await
    }

    async fn fetch_stops(&self, route_id: &str) -> Result<String, TransportError> {
        self.get(
            &self.config.stops_url(),
            &[("include", "route"), ("filter[route]", route_id)],
        )
        .await
    }

    async fn fetch_schedules(&self, query: &ScheduleQuery<'_>) -> Result<String, TransportError> {
        self.get(
            &self.config.schedules_url(),
            &[
                ("include", "route,direction_id"),
                ("filter[route]", query.route_id),
                ("filter[stop]", query.stop_id),
                ("filter[min_time]", query.min_time),
                ("filter[direction_id]", query.direction.as_filter()),
            ],
        )
        .await
    }
}
