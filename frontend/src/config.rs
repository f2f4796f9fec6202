use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_HOME_PATH: &str = "/dashboard";

/// Shape of `config.json` and the `window.__SISFOR_*` globals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub home_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub home_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Fills gaps in `primary` from `fallback`, then from the defaults.
    pub fn merge(primary: RuntimeConfig, fallback: RuntimeConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            api_base_url: pick(primary.api_base_url, fallback.api_base_url)
                .unwrap_or(defaults.api_base_url),
            home_path: pick(primary.home_path, fallback.home_path).unwrap_or(defaults.home_path),
        }
    }
}

fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    let present = |v: &String| !v.trim().is_empty();
    primary.filter(present).or(fallback.filter(present))
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"]),
            home_path: read_key(&obj, &["HOME_PATH", "home_path"]),
        })
    }

    // window.__SISFOR_ENV (env.js) wins over window.__SISFOR_CONFIG.
    pub fn snapshot() -> Option<RuntimeConfig> {
        let env = read_global("__SISFOR_ENV");
        let cfg = read_global("__SISFOR_CONFIG");
        match (env, cfg) {
            (None, None) => None,
            (env, cfg) => Some(RuntimeConfig {
                api_base_url: env
                    .as_ref()
                    .and_then(|e| e.api_base_url.clone())
                    .or_else(|| cfg.as_ref().and_then(|c| c.api_base_url.clone())),
                home_path: env
                    .as_ref()
                    .and_then(|e| e.home_path.clone())
                    .or_else(|| cfg.as_ref().and_then(|c| c.home_path.clone())),
            }),
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let url = crate::utils::navigation::absolute_url("./config.json");
    let resp = reqwest::get(&url).await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    Ok(RuntimeConfig::default())
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        globals::snapshot()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub async fn await_app_config() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals().unwrap_or_default();
    let fetched = if globals.api_base_url.is_some() && globals.home_path.is_some() {
        RuntimeConfig::default()
    } else {
        fetch_runtime_config().await.unwrap_or_else(|err| {
            log::debug!("runtime config unavailable, using defaults: {err}");
            RuntimeConfig::default()
        })
    };
    let resolved = AppConfig::merge(globals, fetched);
    APP_CONFIG.get_or_init(|| resolved).clone()
}

/// Synchronous view for rendering; the defaults until [`init`] has resolved.
pub fn current_home_path() -> String {
    APP_CONFIG
        .get()
        .map(|c| c.home_path.clone())
        .or_else(|| {
            snapshot_from_globals()
                .and_then(|g| g.home_path)
                .filter(|p| !p.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_HOME_PATH.to_string())
}

pub async fn init() {
    let config = await_app_config().await;
    log::info!("api base url: {}", config.api_base_url);
}
