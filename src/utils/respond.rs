use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    services::presenter::{render_rendered, Presenter},
    types::{rendered::Rendered, table_view::TableSet},
};

use super::app_error::AppError;

pub fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Serve tables and placeholders alike with 200, as HTML for browsers and
/// JSON otherwise.
pub fn respond<T: TableSet + Serialize>(
    headers: &HeaderMap,
    presenter: &dyn Presenter,
    title: &str,
    rendered: Rendered<T>,
) -> Result<Response, AppError> {
    if !accepts_html(headers) {
        return Ok((StatusCode::OK, Json(rendered)).into_response());
    }

    let page = render_rendered(presenter, title, &rendered)
        .map_err(|e| AppError::render_failed(title, e))?;

    Ok((StatusCode::OK, Html(page)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn detects_browser_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        assert!(accepts_html(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(!accepts_html(&headers));
    }
}
