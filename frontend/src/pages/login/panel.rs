use crate::{
    components::theme::ThemeToggle,
    pages::login::{
        components::{form::LoginForm, messages::StatusBanner},
        view_model::use_login_view_model,
    },
    state::page::use_page,
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let page = use_page();
    let app_name = page.app_name().to_string();
    let status = page.props.status.clone();
    let vm = use_login_view_model();

    view! {
        <div class="relative flex min-h-screen items-center justify-center bg-gray-50 px-4 py-12 dark:bg-gray-950">
            <div class="absolute right-4 top-4">
                <ThemeToggle />
            </div>
            <div class="w-full max-w-md">
                <div class="mb-8 text-center">
                    <a href="/" class="text-2xl font-bold text-blue-600 dark:text-blue-400">
                        {app_name}
                    </a>
                    <h1 class="mt-6 text-2xl font-semibold text-gray-900 dark:text-gray-100">
                        "Selamat Datang Kembali"
                    </h1>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                        "Masuk untuk melanjutkan ke sistem informasi sekolah."
                    </p>
                </div>
                <div class="rounded-2xl border border-gray-200 bg-white p-8 shadow-sm dark:border-gray-800 dark:bg-gray-900">
                    <StatusBanner status=status />
                    <LoginForm vm=vm />
                </div>
                <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                    <a href="/" class="font-medium text-blue-600 hover:underline dark:text-blue-400">
                        "Kembali ke beranda"
                    </a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::page::{PageBootstrap, PageProps, LOGIN_COMPONENT};
    use crate::test_support::ssr::render_page;

    fn login_page(status: Option<&str>) -> PageBootstrap {
        PageBootstrap {
            component: LOGIN_COMPONENT.into(),
            props: PageProps {
                status: status.map(str::to_string),
                ..PageProps::default()
            },
            url: "/login".into(),
        }
    }

    #[test]
    fn renders_empty_form_with_password_hidden() {
        let html = render_page(login_page(None), || view! { <LoginPanel /> });
        assert!(html.contains("Masuk ke Akun"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Tampilkan kata sandi"));
        assert!(!html.contains("role=\"status\""));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn renders_status_banner_when_present() {
        let html = render_page(
            login_page(Some("Kata sandi Anda telah diatur ulang.")),
            || view! { <LoginPanel /> },
        );
        assert!(html.contains("role=\"status\""));
        assert!(html.contains("Kata sandi Anda telah diatur ulang."));
    }
}
