use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sisfor_backend::{app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sisfor_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        app_name = %config.app_name,
        locale = %config.locale,
        static_dir = %config.static_dir,
        app_entry = %config.app_entry,
        api_base_url = %config.api_base_url,
        cookie_secure = config.cookie_secure,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let app = app(AppState::new(config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
