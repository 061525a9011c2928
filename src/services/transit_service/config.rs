use chrono::Duration;

pub const DEFAULT_MBTA_HOST: &str = "https://api-v3.mbta.com";
pub const DEFAULT_SCHEDULE_WINDOW_MINUTES: i64 = 30;

/// Where the MBTA endpoints live and how to authenticate against them.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub host: String,
    pub api_key: Option<String>,
}

impl EndpointConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn routes_url(&self) -> String {
        format!("{}/routes", self.host)
    }

    pub fn stops_url(&self) -> String {
        format!("{}/stops", self.host)
    }

    pub fn schedules_url(&self) -> String {
        format!("{}/schedules", self.host)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MBTA_HOST)
    }
}

/// User-facing messages for collapsed failures.
#[derive(Debug, Clone)]
pub struct ErrorMessages {
    pub default: String,
    pub missing_route: String,
    pub no_schedule: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            default: "Something went wrong with your request".to_string(),
            missing_route: "Please provide a valid MBTA Route".to_string(),
            no_schedule: "Unable to find any Schedule Times".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransitServiceConfig {
    pub endpoints: EndpointConfig,
    pub messages: ErrorMessages,
    /// How far back from now schedules are listed.
    pub schedule_window: Duration,
}

impl TransitServiceConfig {
    pub fn new(endpoints: EndpointConfig) -> Self {
        Self {
            endpoints,
            messages: ErrorMessages::default(),
            schedule_window: Duration::minutes(DEFAULT_SCHEDULE_WINDOW_MINUTES),
        }
    }

    pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_schedule_window(mut self, window: Duration) -> Self {
        self.schedule_window = window;
        self
    }
}

impl Default for TransitServiceConfig {
    fn default() -> Self {
        Self::new(EndpointConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_ignore_trailing_slash() {
        let endpoints = EndpointConfig::new("http://127.0.0.1:1234/");

        assert_eq!(endpoints.routes_url(), "http://127.0.0.1:1234/routes");
        assert_eq!(endpoints.stops_url(), "http://127.0.0.1:1234/stops");
        assert_eq!(endpoints.schedules_url(), "http://127.0.0.1:1234/schedules");
    }

    #[test]
    fn blank_api_key_is_dropped() {
        let endpoints = EndpointConfig::default().with_api_key(Some(String::new()));
        assert!(endpoints.api_key.is_none());

        let endpoints = EndpointConfig::default().with_api_key(Some("abc".to_string()));
        assert_eq!(endpoints.api_key.as_deref(), Some("abc"));
    }
}
