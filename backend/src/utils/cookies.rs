use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub secure: bool,
    pub same_site: SameSite,
}

/// Written by the client; read here so the first paint already has the theme.
pub const APPEARANCE_COOKIE_NAME: &str = "appearance";
/// One-shot flash message left by the auth collaborator.
pub const STATUS_COOKIE_NAME: &str = "status";
pub const ROOT_COOKIE_PATH: &str = "/";

/// Expires `name` immediately. Not `HttpOnly` since the flash may be set by script.
pub fn build_clear_cookie(name: &str, path: &str, options: CookieOptions) -> String {
    let mut cookie = format!(
        "{}=; Path={}; Max-Age=0; SameSite={}",
        name,
        path,
        same_site_value(options.same_site)
    );
    if options.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Same as [`extract_cookie_value`], percent-decoded; `+` is read as a space.
pub fn extract_decoded_cookie(header: &str, name: &str) -> Option<String> {
    let raw = extract_cookie_value(header, name)?.replace('+', " ");
    Some(percent_decode_str(&raw).decode_utf8_lossy().into_owned())
}

fn same_site_value(same_site: SameSite) -> &'static str {
    match same_site {
        SameSite::Lax => "Lax",
        SameSite::Strict => "Strict",
        SameSite::None => "None",
    }
}
