//! Page data the shell embeds in `<div id="app" data-page="...">`.

use crate::api::SharedUser;
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_ELEMENT_ID: &str = "app";
pub const PAGE_DATA_ATTRIBUTE: &str = "data-page";
pub const DEFAULT_APP_NAME: &str = "SISFOR Sekolah";

pub const WELCOME_COMPONENT: &str = "welcome";
pub const LOGIN_COMPONENT: &str = "auth/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBootstrap {
    pub component: String,
    #[serde(default)]
    pub props: PageProps,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    #[serde(default)]
    pub app_name: Option<String>,
    /// Flash message shown once, e.g. after a password reset.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub auth: AuthProps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProps {
    #[serde(default)]
    pub user: Option<SharedUser>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageComponent {
    Welcome,
    Login,
    Unknown(String),
}

impl PageComponent {
    pub fn from_name(name: &str) -> Self {
        match name {
            WELCOME_COMPONENT => PageComponent::Welcome,
            LOGIN_COMPONENT => PageComponent::Login,
            other => PageComponent::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("#app element not found")]
    MissingRoot,
    #[error("data-page attribute missing")]
    MissingData,
    #[error("invalid page data: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl Default for PageBootstrap {
    fn default() -> Self {
        Self {
            component: WELCOME_COMPONENT.to_string(),
            props: PageProps::default(),
            url: "/".to_string(),
        }
    }
}

impl PageBootstrap {
    pub fn parse(raw: &str) -> Result<Self, BootstrapError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn page(&self) -> PageComponent {
        PageComponent::from_name(&self.component)
    }

    pub fn app_name(&self) -> &str {
        self.props
            .app_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Result<Self, BootstrapError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(APP_ELEMENT_ID))
            .ok_or(BootstrapError::MissingRoot)?;
        let raw = root
            .get_attribute(PAGE_DATA_ATTRIBUTE)
            .ok_or(BootstrapError::MissingData)?;
        Self::parse(&raw)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_document() -> Result<Self, BootstrapError> {
        Err(BootstrapError::MissingRoot)
    }

    /// Falls back to the welcome page when the shell supplied nothing usable.
    pub fn load() -> Self {
        Self::from_document().unwrap_or_else(|err| {
            log::warn!("page bootstrap unavailable ({err}); showing welcome page");
            Self::default()
        })
    }
}

pub fn provide_page(page: PageBootstrap) {
    provide_context(page);
}

pub fn use_page() -> PageBootstrap {
    use_context::<PageBootstrap>().unwrap_or_default()
}
