use reqwest::{header::ACCEPT, Client, RequestBuilder};

use crate::{
    config::{self, AppConfig},
    utils::navigation,
};

#[cfg(target_arch = "wasm32")]
const XSRF_COOKIE: &str = "XSRF-TOKEN";
#[cfg(target_arch = "wasm32")]
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// HTTP client for the external auth collaborator. Session state rides on
/// browser cookies; nothing is stored by this app.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_config(&self) -> AppConfig {
        match &self.base_url {
            Some(base) => AppConfig {
                api_base_url: base.clone(),
                ..AppConfig::default()
            },
            None => config::await_app_config().await,
        }
    }

    pub(super) fn endpoint(config: &AppConfig, path: &str) -> String {
        navigation::absolute_url(&navigation::join(&config.api_base_url, path))
    }

    /// JSON accept header, browser credentials, and the XSRF token echo.
    pub(super) fn with_session(builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(ACCEPT, "application/json");
        #[cfg(target_arch = "wasm32")]
        {
            let builder = builder.fetch_credentials_include();
            match crate::utils::storage::read_cookie(XSRF_COOKIE) {
                Some(token) => builder.header(XSRF_HEADER, token),
                None => builder,
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder
        }
    }
}
