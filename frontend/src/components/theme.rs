use crate::state::theme::use_appearance;
use leptos::*;

pub fn toggle_label(is_dark: bool) -> &'static str {
    if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

/// Flips between explicit light and dark, whatever the current setting.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let appearance = use_appearance();
    let is_dark = appearance.is_dark();
    let label = move || toggle_label(is_dark.get());

    view! {
        <div class="group relative">
            <button
                type="button"
                class="rounded-lg border border-gray-200/50 bg-gray-100 p-2.5 shadow-md transition-all duration-200 hover:bg-gray-200 hover:shadow-lg dark:border-gray-700/50 dark:bg-gray-800 dark:hover:bg-gray-700"
                aria-label=label
                title=label
                on:click=move |_| appearance.toggle()
            >
                <Show
                    when=move || is_dark.get()
                    fallback=|| {
                        view! {
                            <svg class="h-5 w-5 text-slate-700 dark:text-slate-300" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path
                                    fill-rule="evenodd"
                                    d="M9.528 1.718a.75.75 0 01.162.819A8.97 8.97 0 009 6a9 9 0 009 9 8.97 8.97 0 003.463-.69.75.75 0 01.981.98 10.503 10.503 0 01-9.694 6.46c-5.799 0-10.5-4.701-10.5-10.5 0-4.368 2.667-8.112 6.46-9.694a.75.75 0 01.818.162z"
                                    clip-rule="evenodd"
                                ></path>
                            </svg>
                        }
                    }
                >
                    <svg class="h-5 w-5 text-yellow-500" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <circle cx="12" cy="12" r="4.5"></circle>
                        <path d="M12 2.25v2.25M12 19.5v2.25M4.22 4.22l1.59 1.59M18.19 18.19l1.59 1.59M2.25 12h2.25M19.5 12h2.25M4.22 19.78l1.59-1.59M18.19 5.81l1.59-1.59" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
                    </svg>
                </Show>
            </button>
            <span class="pointer-events-none absolute -bottom-10 left-1/2 -translate-x-1/2 whitespace-nowrap rounded bg-gray-900 px-2 py-1 text-xs text-white opacity-0 transition-opacity group-hover:opacity-100 dark:bg-gray-100 dark:text-gray-900">
                {label}
            </span>
        </div>
    }
}
