mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{EMPLOYEE_CODE, PASSWORD};

fn assert_cors_headers(response: &axum_test::TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-headers"),
        "authorization, x-client-info, apikey, content-type"
    );
    assert_eq!(response.header("access-control-allow-methods"), "POST, OPTIONS");
}

#[tokio::test]
async fn test_preflight_returns_ok() {
    let (server, provider) = common::create_test_server();

    let response = server.method(Method::OPTIONS, "/login").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
    assert_cors_headers(&response);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_preflight_ignores_body() {
    let (server, _) = common::create_test_server();

    let response = server
        .method(Method::OPTIONS, "/login")
        .text("{not json")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_success_has_cors_headers() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/login")
        .json(&json!({ "employee_code": EMPLOYEE_CODE, "password": PASSWORD }))
        .await;

    response.assert_status_ok();
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_error_has_cors_headers() {
    let (server, _) = common::create_test_server();

    let response = server.post("/login").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_cors_headers(&response);
    assert_eq!(response.header("content-type"), "application/json");
}
