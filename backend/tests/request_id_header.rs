mod support;

use axum::{body::Body, http::Request};
use sisfor_backend::middleware::request_id::REQUEST_ID_HEADER;
use support::{get, send, test_app};
use uuid::Uuid;

#[tokio::test]
async fn generates_request_id_for_shell_responses() {
    let response = send(test_app(), get("/")).await;
    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn echoes_client_request_id() {
    let request = Request::builder()
        .uri("/login")
        .header("x-request-id", "client-req-123")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "client-req-123");
}

#[tokio::test]
async fn falls_back_to_correlation_id_even_on_errors() {
    let request = Request::builder()
        .uri("/no-such-page")
        .header("x-correlation-id", "corr-req-456")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "corr-req-456");
}
