use std::sync::Arc;

use crate::{config::Config, utils::cookies::CookieOptions};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            secure: self.config.cookie_secure,
            same_site: self.config.cookie_same_site,
        }
    }
}

impl From<Config> for AppState {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
