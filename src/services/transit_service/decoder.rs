use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::mbta_json_api::Document;

use super::types::transit_service_error::DecodeError;

/// Parse a JSON:API body, requiring a non-empty `data` array.
pub fn decode<A: DeserializeOwned>(body: &str) -> Result<Document<A>, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    match value.get("data") {
        Some(Value::Array(items)) if !items.is_empty() => {}
        _ => return Err(DecodeError::Empty),
    }

    serde_json::from_value(value).map_err(|e| DecodeError::Malformed(e.to_string()))
}
