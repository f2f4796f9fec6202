use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage, Window};

use super::cookies;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

fn html_document() -> Result<HtmlDocument, String> {
    window()?
        .document()
        .ok_or_else(|| "No document".to_string())?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "Document is not an HTML document".to_string())
}

pub fn read_cookie(name: &str) -> Option<String> {
    let all = html_document().ok()?.cookie().ok()?;
    cookies::cookie_value(&all, name)
}

pub fn write_cookie(name: &str, value: &str, max_age: Duration) -> Result<(), String> {
    html_document()?
        .set_cookie(&cookies::build_cookie(name, value, max_age))
        .map_err(|_| format!("Failed to write cookie {}", name))
}
