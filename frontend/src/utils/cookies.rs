use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use std::time::Duration;

/// Finds `name` in a `document.cookie` string and percent-decodes its value.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() != name {
            return None;
        }
        percent_decode_str(value.trim())
            .decode_utf8()
            .ok()
            .map(|v| v.into_owned())
    })
}

/// A client-writable cookie scoped to the whole site.
pub fn build_cookie(name: &str, value: &str, max_age: Duration) -> String {
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        name,
        utf8_percent_encode(value, NON_ALPHANUMERIC),
        max_age.as_secs()
    )
}
