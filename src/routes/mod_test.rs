use super::*;
use crate::state::test_helpers;
use axum::body::Body;
use axum::http::{Method, Request, header};
use tower::ServiceExt as _;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_reject_malformed_ask_body() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"question":"hi"}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn api_routes_report_unconfigured_relay() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"query":"hi"}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn api_routes_allow_cross_origin_preflight() {
    let app = api_routes(test_helpers::test_app_state());
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/ask")
        .header(header::ORIGIN, "https://www.jmu.edu")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}
