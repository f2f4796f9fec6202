#![allow(dead_code)]
use axum::{
    body::Body,
    http::{header::COOKIE, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use sisfor_backend::{app, config::Config, state::AppState};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/static").to_string(),
        ..Config::default()
    }
}

pub fn test_app() -> Router {
    app(AppState::new(test_config()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .expect("build request")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Pulls the `data-page` attribute back out of the shell and unescapes it.
pub fn page_data(html: &str) -> serde_json::Value {
    let start = html.find("data-page=\"").expect("data-page attribute") + "data-page=\"".len();
    let end = start + html[start..].find('"').expect("closing quote");
    let raw = html[start..end]
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    serde_json::from_str(&raw).expect("page json")
}
