use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status} for {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("response has no data")]
    Empty,

    #[error("response is missing {0}")]
    MissingContext(&'static str),
}

#[derive(Debug, Error)]
pub enum TransitServiceError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransitServiceError::from(DecodeError::MissingContext("included route"));
        assert_eq!(err.to_string(), "response is missing included route");

        let err = TransitServiceError::from(TransportError::Status {
            status: 503,
            url: "http://host/routes".into(),
        });
        assert_eq!(
            err.to_string(),
            "transport failure: upstream returned 503 for http://host/routes"
        );
    }
}
