use leptos::*;

/// Inline message under a single input; renders nothing without a message.
#[component]
pub fn InputError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Flash notice handed over by the previous page, e.g. after a password reset.
#[component]
pub fn StatusBanner(status: Option<String>) -> impl IntoView {
    status.filter(|s| !s.trim().is_empty()).map(|status| {
        view! {
            <div
                role="status"
                class="mb-4 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm font-medium text-green-700 dark:border-green-800 dark:bg-green-900/30 dark:text-green-300"
            >
                {status}
            </div>
        }
    })
}

#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-800 dark:bg-red-900/30 dark:text-red-300"
            >
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
