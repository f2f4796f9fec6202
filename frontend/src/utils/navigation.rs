/// Full-page navigation. The destination is owned by the server, not this app.
pub fn redirect_to(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(href).is_err() {
                log::warn!("navigation to {href} was rejected");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = href;
    }
}

/// Joins a path onto the page origin. The wasm HTTP client needs absolute URLs.
pub fn absolute_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return join(&origin, url);
        }
    }
    url.to_string()
}

pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches("./").trim_start_matches('/')
    )
}
