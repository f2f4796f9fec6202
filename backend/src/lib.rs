use axum::{
    handler::HandlerWithoutStateExt, http::Method, middleware as axum_middleware, routing::get,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod templates;
pub mod utils;

use state::AppState;

/// Shell routes first, then static assets, then a JSON 404.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir)
        .append_index_html_on_directories(false)
        .not_found_service(handlers::not_found.into_service());

    Router::new()
        .route("/", get(handlers::pages::welcome))
        .route("/login", get(handlers::pages::login))
        .route("/config.json", get(handlers::config::get_runtime_config))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::log_error_responses))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
