use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};
use thiserror::Error;

use crate::utils::cookies::SameSite;

pub const DEFAULT_APP_NAME: &str = "SISFOR Sekolah";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
    #[error("Invalid {name} value: {value}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app_name: String,
    pub locale: String,
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub app_entry: String,
    pub api_base_url: String,
    pub home_path: String,
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            locale: "id".to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: "dist".to_string(),
            app_entry: "/pkg/sisfor_frontend.js".to_string(),
            api_base_url: "/api".to_string(),
            home_path: "/dashboard".to_string(),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok())?)
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => defaults.bind_addr,
        };

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_flag("COOKIE_SECURE", &raw)?,
            None => defaults.cookie_secure,
        };

        Ok(Config {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            locale: get("APP_LOCALE").unwrap_or(defaults.locale),
            bind_addr,
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
            app_entry: get("APP_ENTRY").unwrap_or(defaults.app_entry),
            api_base_url: get("API_BASE_URL").unwrap_or(defaults.api_base_url),
            home_path: get("HOME_PATH").unwrap_or(defaults.home_path),
            cookie_secure,
            cookie_same_site: defaults.cookie_same_site,
        })
    }

    /// `en_US` style locales become `en-US` for the `lang` attribute.
    pub fn html_lang(&self) -> String {
        self.locale.replace('_', "-")
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = Config::from_lookup(lookup(&[])).expect("config");
        assert_eq!(cfg.app_name, "SISFOR Sekolah");
        assert_eq!(cfg.locale, "id");
        assert_eq!(cfg.bind_addr.port(), 8000);
        assert_eq!(cfg.home_path, "/dashboard");
        assert!(!cfg.cookie_secure);
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let cfg = Config::from_lookup(lookup(&[
            ("APP_NAME", "SMA Negeri 1"),
            ("APP_LOCALE", "en_US"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("API_BASE_URL", "  "),
            ("COOKIE_SECURE", "true"),
        ]))
        .expect("config");
        assert_eq!(cfg.app_name, "SMA Negeri 1");
        assert_eq!(cfg.html_lang(), "en-US");
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.api_base_url, "/api");
        assert!(cfg.cookie_secure);
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
    }

    #[test]
    fn invalid_flag_is_an_error() {
        let err = Config::from_lookup(lookup(&[("COOKIE_SECURE", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { name: "COOKIE_SECURE", .. }));
    }
}
