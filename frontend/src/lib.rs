use leptos::*;

mod api;
pub mod app;
mod components;
pub mod config;
mod pages;
mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_support;

use app::App;
use state::page::PageBootstrap;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger unavailable: {err}").into());
    }
    log::info!("Starting SISFOR Sekolah frontend (wasm)");

    // Resolves ./config.json in the background; window.__SISFOR_ENV wins when present.
    spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    let page = PageBootstrap::load();
    log::debug!("mounting component {:?}", page.component);
    mount(page);
}

#[cfg(target_arch = "wasm32")]
fn mount(page: PageBootstrap) {
    use wasm_bindgen::JsCast;

    let root = utils::storage::window()
        .ok()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(state::page::APP_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match root {
        Some(root) => mount_to(root, move || view! { <App page=page /> }),
        None => mount_to_body(move || view! { <App page=page /> }),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mount(page: PageBootstrap) {
    mount_to_body(move || view! { <App page=page /> });
}
