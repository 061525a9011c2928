use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::error;

/// A transit page that could not be rendered, not even as a placeholder.
#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn render_failed(title: &str, cause: askama::Error) -> Self {
        error!("Failed to render {} page: {}", title, cause);
        AppError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Unable to display {}", title),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorBody {
                message: &self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use tracing_test::traced_test;

    use super::*;

    #[tokio::test]
    #[traced_test]
    async fn render_failure_is_a_json_500() {
        let error = AppError::render_failed("MBTA Routes", askama::Error::Fmt(std::fmt::Error));

        assert!(logs_contain("Failed to render MBTA Routes page"));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"message":"Unable to display MBTA Routes"}"#);
    }
}
