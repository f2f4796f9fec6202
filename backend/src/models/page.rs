use serde::{Deserialize, Serialize};

pub const WELCOME_COMPONENT: &str = "welcome";
pub const LOGIN_COMPONENT: &str = "auth/login";

/// What the client reads back from `<div id="app" data-page="...">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub component: String,
    pub props: PageProps,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    pub app_name: String,
    pub status: Option<String>,
    pub auth: AuthProps,
}

/// Always empty here; the client asks the auth collaborator for the session user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProps {
    pub user: Option<SharedUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedUser {
    pub name: String,
    pub email: String,
}

impl PageData {
    pub fn new(component: &str, url: &str, app_name: &str, status: Option<String>) -> Self {
        Self {
            component: component.to_string(),
            props: PageProps {
                app_name: app_name.to_string(),
                status: status.filter(|s| !s.trim().is_empty()),
                auth: AuthProps::default(),
            },
            url: url.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_the_bootstrap_shape() {
        let page = PageData::new(
            LOGIN_COMPONENT,
            "/login",
            "SISFOR Sekolah",
            Some("Kata sandi Anda telah diatur ulang.".into()),
        );
        let value: serde_json::Value =
            serde_json::from_str(&page.to_json().expect("json")).expect("parse");
        assert_eq!(
            value,
            json!({
                "component": "auth/login",
                "props": {
                    "app_name": "SISFOR Sekolah",
                    "status": "Kata sandi Anda telah diatur ulang.",
                    "auth": { "user": null }
                },
                "url": "/login"
            })
        );
    }

    #[test]
    fn blank_status_is_dropped() {
        let page = PageData::new(WELCOME_COMPONENT, "/", "SISFOR Sekolah", Some("  ".into()));
        assert!(page.props.status.is_none());
    }
}
