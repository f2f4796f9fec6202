use serde::{Deserialize, Serialize};

/// Stored appearance setting as the shell sees it in the `appearance` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    #[default]
    System,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::System => "system",
        }
    }

    /// Anything unrecognised falls back to `system`.
    pub fn from_cookie(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => Appearance::Light,
            Some("dark") => Appearance::Dark,
            _ => Appearance::System,
        }
    }

    /// The shell renders the dark class up front only for an explicit `dark`.
    pub fn renders_dark(self) -> bool {
        self == Appearance::Dark
    }
}
