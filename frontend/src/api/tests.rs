#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn credentials() -> Credentials {
    Credentials {
        email: "kepala@sekolah.sch.id".into(),
        password: "rahasia".into(),
        remember: true,
    }
}

#[tokio::test]
async fn login_posts_credentials_and_follows_redirect() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login")
                .header("accept", "application/json")
                .json_body(json!({
                    "email": "kepala@sekolah.sch.id",
                    "password": "rahasia",
                    "remember": true
                }));
            then.status(200).json_body(json!({ "redirect": "/admin" }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let success = client.login(&credentials()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(success.redirect, "/admin");
}

#[tokio::test]
async fn login_without_body_uses_home_path() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login");
            then.status(204);
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let success = client.login(&credentials()).await.unwrap();
    assert_eq!(success.redirect, crate::config::DEFAULT_HOME_PATH);
}

#[tokio::test]
async fn login_surfaces_validation_errors_per_field() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login");
            then.status(422).json_body(json!({
                "message": "These credentials do not match our records.",
                "errors": { "email": ["These credentials do not match our records."] }
            }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let err = client.login(&credentials()).await.unwrap_err();
    let errors = match err {
        LoginError::Validation { errors, .. } => errors,
        other => panic!("expected validation errors, got {other:?}"),
    };
    assert_eq!(
        errors.get("email"),
        Some("These credentials do not match our records.")
    );
    assert!(errors.get("password").is_none());
}

#[tokio::test]
async fn login_maps_server_error_to_rejection() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login");
            then.status(500).json_body(json!({ "message": "Server Error" }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    match client.login(&credentials()).await {
        Err(LoginError::Rejected(api)) => {
            assert_eq!(api.error, "Server Error");
            assert_eq!(api.code, "HTTP_500");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn login_reports_transport_failure() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = client.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, LoginError::Request(_)));
}

#[tokio::test]
async fn current_user_reads_session_user() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user");
            then.status(200).json_body(json!({
                "name": "Siti Rahayu",
                "email": "siti@sekolah.sch.id"
            }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let user = client.current_user().await.unwrap().expect("user");
    assert_eq!(user.name, "Siti Rahayu");
}

#[tokio::test]
async fn current_user_is_none_when_unauthenticated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user");
            then.status(401).json_body(json!({ "message": "Unauthenticated." }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    assert!(client.current_user().await.unwrap().is_none());
}
