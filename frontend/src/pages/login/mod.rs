use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

pub const LOGIN_TITLE: &str = "Masuk - SISFOR Sekolah";

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text=LOGIN_TITLE />
        <LoginPanel />
    }
}
