mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::qr_handler;
use shortlink::domain::expiration::ExpirationOption;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn server(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/qr/{code}", get(qr_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_qr_returns_png() {
    let ctx = common::create_test_context();
    common::create_test_mapping(
        &ctx.state,
        "https://example.com",
        ExpirationOption::Indefinite,
        Some("qrlink"),
    )
    .await;

    let server = server(ctx.state.clone());

    let response = server.get("/qr/qrlink").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(
        response.header("content-disposition"),
        "inline; filename=qr.png"
    );
    assert!(response.as_bytes().starts_with(PNG_SIGNATURE));
}

#[tokio::test]
async fn test_qr_has_no_side_effects() {
    let ctx = common::create_test_context();
    common::create_test_mapping(
        &ctx.state,
        "https://example.com",
        ExpirationOption::Indefinite,
        Some("qrquiet"),
    )
    .await;

    let server = server(ctx.state.clone());

    server.get("/qr/qrquiet").await.assert_status_ok();

    let mapping = ctx.state.mapping_service.get_stats("qrquiet").await.unwrap();
    assert_eq!(mapping.click_count, 0);
}

#[tokio::test]
async fn test_qr_not_found() {
    let ctx = common::create_test_context();
    let server = server(ctx.state.clone());

    let response = server.get("/qr/missing").await;

    response.assert_status_not_found();
}
