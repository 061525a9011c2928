use serde::Deserialize;

/// A JSON:API document as returned by the MBTA v3 API.
#[derive(Debug, Deserialize)]
pub struct Document<A> {
    pub data: Vec<Resource<A>>,
    #[serde(default)]
    pub included: Vec<Resource<IncludedAttributes>>,
}

#[derive(Debug, Deserialize)]
pub struct Resource<A> {
    pub id: String,
    pub attributes: A,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteAttributes {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub direction_names: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StopAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleAttributes {
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
}

/// Attributes of a side-loaded resource. Only the route fields are read;
/// anything else in `included` decodes to all-`None`.
#[derive(Debug, Default, Deserialize)]
pub struct IncludedAttributes {
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub direction_names: Option<Vec<Option<String>>>,
}
