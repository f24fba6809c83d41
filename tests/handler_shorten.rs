mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortlink::api::handlers::shorten_handler;
use shortlink::domain::expiration::ExpirationOption;

fn server(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_generated_code_success() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "expires_in": "1h"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_url"].as_str().unwrap();

    assert_eq!(code.len(), 10);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["original_url"], "https://example.com/");
    assert_eq!(json["short_link"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["is_active"], true);
    assert_eq!(json["expires_at"], "2026-01-01T13:00:00Z");
}

#[tokio::test]
async fn test_shorten_never_has_no_expiry() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://example.com/page",
            "expires_in": "never"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["expires_at"].is_null());
}

#[tokio::test]
async fn test_shorten_with_custom_alias_is_lowercased() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "expires_in": "7d",
            "custom_alias": "My-Link_1"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "my-link_1");
    assert_eq!(json["short_link"], "https://sho.rt/my-link_1");
}

#[tokio::test]
async fn test_shorten_duplicate_alias_conflict() {
    let ctx = common::create_test_context();
    common::create_test_mapping(
        &ctx.state,
        "https://first.example.com",
        ExpirationOption::Indefinite,
        Some("promo"),
    )
    .await;

    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://second.example.com",
            "expires_in": "1h",
            "custom_alias": "PROMO"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Pick another alias")
    );

    // The original mapping is untouched
    assert_eq!(ctx.repository.len().await, 1);
}

#[tokio::test]
async fn test_shorten_alias_taken_by_inactive_mapping() {
    let ctx = common::create_test_context();
    common::create_test_mapping(
        &ctx.state,
        "https://example.com",
        ExpirationOption::OneHour,
        Some("gone"),
    )
    .await;

    // Expire and deactivate it
    ctx.clock.advance(chrono::Duration::hours(2));
    assert!(ctx.state.mapping_service.resolve("gone").await.is_err());

    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "expires_in": "1h",
            "custom_alias": "gone"
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_shorten_rejects_reserved_alias() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    for alias in ["stats", "Urls", "shorten", "health"] {
        let response = server
            .post("/shorten")
            .json(&json!({
                "original_url": "https://example.com",
                "expires_in": "1h",
                "custom_alias": alias
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "validation_error"
        );
    }

    assert!(ctx.repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_rejects_invalid_alias() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let too_long = "a".repeat(21);

    for alias in ["ab", too_long.as_str(), "bad alias", "emoji🙂", "---"] {
        let response = server
            .post("/shorten")
            .json(&json!({
                "original_url": "https://example.com",
                "expires_in": "1h",
                "custom_alias": alias
            }))
            .await;

        response.assert_status_bad_request();
    }

    assert!(ctx.repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "not-a-valid-url",
            "expires_in": "1h"
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "ftp://files.example.com/archive.zip",
            "expires_in": "1h"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_unknown_expiration_rejected() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "expires_in": "2w"
        }))
        .await;

    assert!(response.status_code().is_client_error());
    assert!(ctx.repository.is_empty().await);
}
