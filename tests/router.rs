mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use url_alias_resolver::routes::app_router;

#[tokio::test]
async fn test_router_serves_nested_api_with_trailing_slash() {
    let app = app_router(common::create_test_state(common::enabled()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/content/2100/urls/")
                .header("Host", "localhost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_unknown_route() {
    let app = app_router(common::create_test_state(common::enabled()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .header("Host", "localhost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
