mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::json;
use shortlink::api::routes::routes;
use shortlink::domain::expiration::ExpirationOption;
use shortlink::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_fixed_routes_win_over_code_capture() {
    let ctx = common::create_test_context();
    let server = TestServer::new(routes().with_state(ctx.state.clone())).unwrap();

    // Empty store: /urls is the list endpoint, not a redirect lookup
    let response = server.get("/urls").await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "No URLs found"
    );

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_full_flow() {
    let ctx = common::create_test_context();
    let server = TestServer::new(routes().with_state(ctx.state.clone())).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://example.com/docs",
            "expires_in": "30d"
        }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_url"].as_str().unwrap().to_string();

    let response = server.get(&format!("/{code}")).await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/docs");

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["click_count"], 1);

    server.get(&format!("/qr/{code}")).await.assert_status_ok();

    let list = server.get("/urls").await.json::<serde_json::Value>();
    assert_eq!(list["total"], 1);
    assert_eq!(list["urls"][0]["short_url"], code.as_str());
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let ctx = common::create_test_context();
    common::create_test_mapping(
        &ctx.state,
        "https://example.com",
        ExpirationOption::Indefinite,
        Some("slashed"),
    )
    .await;

    let app = app_router(ctx.state.clone(), &[]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats/slashed/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_for_configured_origin() {
    let ctx = common::create_test_context();
    let app = app_router(ctx.state.clone(), &["http://localhost:3000".to_string()]);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/shorten")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("http://localhost:3000"))
    );
}
