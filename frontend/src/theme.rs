//! Light/dark appearance resolution for the document root.
//!
//! The persisted setting is one of `light`, `dark` or `system`. A `system`
//! setting follows the OS `prefers-color-scheme` signal and falls back to
//! light when the media query API is unavailable. The resolved theme is
//! applied as a `dark` class on `<html>`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DARK_CLASS: &str = "dark";
pub const APPEARANCE_KEY: &str = "appearance";
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Cookie lifetime for the persisted setting (one year).
pub const APPEARANCE_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    #[default]
    System,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::System => "system",
        }
    }

    /// Interprets a stored value. Missing or unrecognised values mean `system`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appearance `{0}`")]
pub struct AppearanceParseError(pub String);

impl FromStr for Appearance {
    type Err = AppearanceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            "system" => Ok(Appearance::System),
            other => Err(AppearanceParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }

    /// The explicit setting a toggle switches to from this theme.
    pub fn toggled(self) -> Appearance {
        match self {
            ResolvedTheme::Light => Appearance::Dark,
            ResolvedTheme::Dark => Appearance::Light,
        }
    }
}

/// `system_prefers_dark` is `None` when the OS signal cannot be queried.
pub fn resolve(appearance: Appearance, system_prefers_dark: Option<bool>) -> ResolvedTheme {
    match appearance {
        Appearance::Light => ResolvedTheme::Light,
        Appearance::Dark => ResolvedTheme::Dark,
        Appearance::System => {
            if system_prefers_dark.unwrap_or(false) {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

pub trait AppearanceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, appearance: Appearance);
}

pub trait SystemPreference {
    fn prefers_dark(&self) -> Option<bool>;
}

pub trait ThemeRoot {
    fn apply(&self, theme: ResolvedTheme);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppliedAppearance {
    pub appearance: Appearance,
    pub theme: ResolvedTheme,
}

/// Object-safe surface so the reactive layer can hold any resolver.
pub trait AppearanceController {
    fn initialize(&self) -> AppliedAppearance;
    fn update(&self, appearance: Appearance) -> AppliedAppearance;
    /// Re-applies after an OS preference change. Explicit settings are left alone.
    fn system_changed(&self, current: Appearance) -> Option<AppliedAppearance>;
}

#[derive(Debug, Clone)]
pub struct AppearanceResolver<S, P, R> {
    store: S,
    system: P,
    root: R,
}

impl<S, P, R> AppearanceResolver<S, P, R>
where
    S: AppearanceStore,
    P: SystemPreference,
    R: ThemeRoot,
{
    pub fn new(store: S, system: P, root: R) -> Self {
        Self {
            store,
            system,
            root,
        }
    }

    fn apply(&self, appearance: Appearance) -> AppliedAppearance {
        let theme = resolve(appearance, self.system.prefers_dark());
        self.root.apply(theme);
        AppliedAppearance { appearance, theme }
    }
}

impl<S, P, R> AppearanceController for AppearanceResolver<S, P, R>
where
    S: AppearanceStore,
    P: SystemPreference,
    R: ThemeRoot,
{
    fn initialize(&self) -> AppliedAppearance {
        let stored = self.store.load();
        self.apply(Appearance::from_stored(stored.as_deref()))
    }

    fn update(&self, appearance: Appearance) -> AppliedAppearance {
        self.store.save(appearance);
        self.apply(appearance)
    }

    fn system_changed(&self, current: Appearance) -> Option<AppliedAppearance> {
        (current == Appearance::System).then(|| self.apply(current))
    }
}

pub type BrowserResolver = AppearanceResolver<BrowserStore, MediaQueryPreference, DocumentRoot>;

pub fn browser_resolver() -> BrowserResolver {
    AppearanceResolver::new(BrowserStore, MediaQueryPreference, DocumentRoot)
}

/// `localStorage` plus an `appearance` cookie the shell server reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

/// `document.documentElement.classList`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use crate::utils::storage;
    use std::time::Duration;
    use wasm_bindgen::{closure::Closure, JsCast};

    impl AppearanceStore for BrowserStore {
        fn load(&self) -> Option<String> {
            storage::local_storage()
                .ok()
                .and_then(|s| s.get_item(APPEARANCE_KEY).ok().flatten())
                .or_else(|| storage::read_cookie(APPEARANCE_KEY))
        }

        fn save(&self, appearance: Appearance) {
            if let Ok(s) = storage::local_storage() {
                let _ = s.set_item(APPEARANCE_KEY, appearance.as_str());
            }
            if let Err(err) = storage::write_cookie(
                APPEARANCE_KEY,
                appearance.as_str(),
                Duration::from_secs(APPEARANCE_COOKIE_MAX_AGE_SECS),
            ) {
                log::warn!("failed to persist appearance cookie: {err}");
            }
        }
    }

    fn media_query() -> Option<web_sys::MediaQueryList> {
        web_sys::window()?
            .match_media(COLOR_SCHEME_QUERY)
            .ok()
            .flatten()
    }

    impl SystemPreference for MediaQueryPreference {
        fn prefers_dark(&self) -> Option<bool> {
            media_query().map(|list| list.matches())
        }
    }

    impl ThemeRoot for DocumentRoot {
        fn apply(&self, theme: ResolvedTheme) {
            let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let _ = html.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
    }

    pub fn watch_system_preference(on_change: impl Fn(bool) + 'static) {
        let Some(list) = media_query() else {
            return;
        };
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(_)>);
        if list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("unable to observe {COLOR_SCHEME_QUERY}");
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::watch_system_preference;

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use super::*;

    impl AppearanceStore for BrowserStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _appearance: Appearance) {}
    }

    impl SystemPreference for MediaQueryPreference {
        fn prefers_dark(&self) -> Option<bool> {
            None
        }
    }

    impl ThemeRoot for DocumentRoot {
        fn apply(&self, _theme: ResolvedTheme) {}
    }

    pub fn watch_system_preference(_on_change: impl Fn(bool) + 'static) {}
}

#[cfg(not(target_arch = "wasm32"))]
pub use host::watch_system_preference;
