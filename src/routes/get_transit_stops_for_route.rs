use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, respond::respond},
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};

pub async fn get_transit_stops_for_route(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let rendered = state.route_downloader.route_stops(&name).await;

    respond(&headers, state.presenter.as_ref(), "MBTA Route", rendered)
}

/// `/route` with no route name still answers with the placeholder.
pub async fn get_transit_stops_without_route(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let rendered = state.route_downloader.route_stops("").await;

    respond(&headers, state.presenter.as_ref(), "MBTA Route", rendered)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use crate::{
        app::{gen_app, AppConfig},
        types::{
            rendered::Rendered,
            table_view::{CellContent, TableView, View},
        },
    };

    #[tokio::test]
    #[traced_test]
    async fn get_response() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(AppConfig::for_host(mock_server.url()));

        let mock_response = json!({
            "data": [
                {
                    "id": "place-alfcl",
                    "type": "stop",
                    "attributes": {
                        "name": "Alewife",
                        "address": "Alewife Brook Pkwy and Cambridge Park Dr, Cambridge, MA 02140"
                    }
                },
                {
                    "id": "place-davis",
                    "type": "stop",
                    "attributes": {
                        "name": "Davis",
                        "address": "Holland St and College Ave, Somerville, MA"
                    }
                }
            ],
            "included": [
                {
                    "id": "Red",
                    "type": "route",
                    "attributes": { "long_name": "Red Line", "direction_names": ["South", "North"] }
                }
            ]
        });

        let mock_server = mock_server
            .mock("GET", "/stops")
            .with_header("content-type", "application/vnd.api+json")
            .with_body(mock_response.to_string())
            .match_query(mockito::Matcher::UrlEncoded(
                "filter[route]".into(),
                "Red".into(),
            ))
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/mbta/route/Red")
                    .header("accept", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock_server.assert();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Rendered<TableView> = serde_json::from_slice(&body).unwrap();

        let table = body.tables().expect("expected stop table");
        assert_eq!(table.caption, "Route ID: Red, Long Name: Red Line");
        assert_eq!(table.rows.len(), 2);
        match &table.rows[1][0].content {
            CellContent::Link(link) => {
                assert_eq!(link.view, View::ScheduleDetail);
                assert_eq!(link.label, "place-davis");
            }
            other => panic!("expected link cell, got {:?}", other),
        }
        assert_eq!(table.rows[1][1].label(), "Davis");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_missing_route() {
        let mock_server = mockito::Server::new_async().await;

        let app = gen_app(AppConfig::for_host(mock_server.url()));

        let response = app
            .oneshot(Request::builder().uri("/mbta/route").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Rendered<TableView> = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body.placeholder().map(|p| p.message.as_str()),
            Some("Please provide a valid MBTA Route")
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_not_found() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(AppConfig::for_host(mock_server.url()));

        let mock_server = mock_server
            .mock("GET", "/stops")
            .with_header("content-type", "application/vnd.api+json")
            .with_body(json!({ "errors": [{ "status": "404", "code": "not_found" }] }).to_string())
            .with_status(404)
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/mbta/route/Nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock_server.assert();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Rendered<TableView> = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body.placeholder().map(|p| p.message.as_str()),
            Some("Something went wrong with your request")
        );
    }
}
