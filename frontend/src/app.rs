use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::{
    pages::{LoginPage, WelcomePage},
    state::{
        auth::AuthProvider,
        page::{provide_page, PageBootstrap, PageComponent},
        theme::provide_appearance,
    },
};

/// Picks the page named by the shell's bootstrap data.
pub fn page_view(page: &PageComponent) -> View {
    match page {
        PageComponent::Welcome => view! { <WelcomePage /> }.into_view(),
        PageComponent::Login => view! { <LoginPage /> }.into_view(),
        PageComponent::Unknown(name) => view! { <NotFound name=name.clone() /> }.into_view(),
    }
}

#[component]
pub fn App(page: PageBootstrap) -> impl IntoView {
    provide_meta_context();
    provide_appearance();
    let component = page.page();
    provide_page(page);

    view! {
        <AuthProvider>
            {page_view(&component)}
        </AuthProvider>
    }
}

#[component]
fn NotFound(name: String) -> impl IntoView {
    log::warn!("unknown page component: {name}");
    view! {
        <Title text="Halaman tidak ditemukan - SISFOR Sekolah" />
        <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50 px-4 text-center dark:bg-gray-950">
            <p class="text-5xl font-bold text-blue-600 dark:text-blue-400">"404"</p>
            <h1 class="mt-4 text-2xl font-semibold text-gray-900 dark:text-gray-100">
                "Halaman tidak ditemukan"
            </h1>
            <a href="/" class="mt-6 font-medium text-blue-600 hover:underline dark:text-blue-400">
                "Kembali ke beranda"
            </a>
        </div>
    }
}
