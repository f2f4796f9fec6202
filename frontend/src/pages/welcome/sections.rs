use super::content::{
    Highlight, ABOUT_POINTS, BENEFITS, FEATURE_GROUPS, FOOTER_COLUMNS, HERO_BADGE, HERO_SUMMARY,
    RATING, STATS, TAGLINE, TESTIMONIALS,
};
use crate::{
    components::theme::ThemeToggle,
    config,
    state::{auth::use_auth, page::use_page},
};
use chrono::Datelike;
use leptos::*;

const LOGO_SRC: &str = "/assets/images/Tutwurihandayani.png";
const LINK_BUTTON: &str = "rounded-lg bg-blue-600 px-6 py-2.5 font-medium text-white shadow-lg hover:bg-blue-700";

#[component]
pub fn NavBar() -> impl IntoView {
    let app_name = use_page().app_name().to_string();
    let (auth, _) = use_auth();
    let home_path = config::current_home_path();

    view! {
        <nav class="relative z-10 flex items-center justify-between p-6 lg:px-8">
            <a href="/" class="flex items-center space-x-3">
                <img src=LOGO_SRC alt="Tutwurihandayani Logo" class="h-10 w-10 object-contain" />
                <div>
                    <p class="text-xl font-bold text-gray-900 dark:text-white">{app_name}</p>
                    <p class="text-sm text-gray-600 dark:text-gray-300">{TAGLINE}</p>
                </div>
            </a>
            <div class="flex items-center space-x-4">
                <ThemeToggle />
                {move || {
                    let state = auth.get();
                    if state.loading {
                        view! { <span class="h-10 w-24" aria-hidden="true"></span> }.into_view()
                    } else if state.user.is_some() {
                        view! { <a href=home_path.clone() class=LINK_BUTTON>"Dashboard"</a> }
                            .into_view()
                    } else {
                        view! { <a href="/login" class=LINK_BUTTON>"Login"</a> }.into_view()
                    }
                }}
            </div>
        </nav>
    }
}

#[component]
fn HighlightCard(highlight: &'static Highlight) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-blue-200/50 bg-blue-50 p-4 dark:border-blue-700/50 dark:bg-blue-900/20">
            <h3 class="mb-1 font-semibold text-gray-900 dark:text-white">{highlight.title}</h3>
            <p class="text-sm text-gray-600 dark:text-gray-400">{highlight.body}</p>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <main class="relative z-10 px-6 py-12">
            <div class="mx-auto grid max-w-7xl items-center gap-8 lg:grid-cols-2">
                <div class="space-y-6">
                    <span class="inline-flex items-center rounded-full bg-blue-100 px-4 py-2 text-sm font-medium text-blue-800 dark:bg-blue-900/30 dark:text-blue-200">
                        {HERO_BADGE}
                    </span>
                    <h1 class="text-4xl font-bold leading-tight text-gray-900 dark:text-white lg:text-5xl">
                        "Sistem Informasi"
                        <span class="block bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                            "Manajemen Sekolah"
                        </span>
                    </h1>
                    <p class="max-w-2xl text-lg text-gray-600 dark:text-gray-300">{HERO_SUMMARY}</p>
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                        {BENEFITS
                            .iter()
                            .map(|highlight| view! { <HighlightCard highlight=highlight /> })
                            .collect_view()}
                    </div>
                </div>
                <img
                    src="/assets/images/Teacher.png"
                    alt="Professional Teacher - SISFOR Sekolah"
                    class="mx-auto w-full max-w-lg object-contain"
                />
            </div>
        </main>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about-section" class="bg-white py-20 dark:bg-slate-900">
            <div class="mx-auto max-w-7xl px-6">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Tentang SISFOR Sekolah"</h2>
                    <p class="mx-auto mt-4 max-w-3xl text-lg text-gray-600 dark:text-gray-300">
                        "Sistem informasi terpadu yang dirancang khusus untuk memenuhi kebutuhan administrasi dan manajemen sekolah menengah atas di era digital."
                    </p>
                </div>
                <div class="grid items-center gap-12 lg:grid-cols-2">
                    <div class="space-y-6">
                        {ABOUT_POINTS
                            .iter()
                            .map(|highlight| view! { <HighlightCard highlight=highlight /> })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-2 gap-6 rounded-2xl bg-gradient-to-br from-blue-600 to-indigo-700 p-8 text-white">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center">
                                        <div class="text-3xl font-bold">{stat.value}</div>
                                        <div class="text-sm text-blue-100">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="bg-gray-50 py-20 dark:bg-slate-800">
            <div class="mx-auto max-w-7xl px-6">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">
                        "Sistem Manajemen Sekolah Terlengkap"
                    </h2>
                    <p class="mx-auto mt-4 max-w-3xl text-lg text-gray-600 dark:text-gray-300">
                        "Platform terintegrasi dengan 12+ modul master data untuk mengelola seluruh aspek administrasi sekolah dari akademik hingga operasional dengan efisien dan akurat."
                    </p>
                </div>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {FEATURE_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="rounded-xl bg-white p-6 shadow-sm dark:bg-slate-900">
                                    <h3 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">
                                        {group.title}
                                    </h3>
                                    <ul class="space-y-2 text-sm text-gray-600 dark:text-gray-400">
                                        {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="bg-white py-20 dark:bg-slate-900">
            <div class="mx-auto max-w-7xl px-6">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Dipercaya oleh Sekolah Terbaik"</h2>
                    <p class="mx-auto mt-4 max-w-3xl text-lg text-gray-600 dark:text-gray-300">
                        "Testimoni dari kepala sekolah dan guru yang telah merasakan manfaat SISFOR Sekolah."
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-3">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <figure class="rounded-xl bg-gray-50 p-6 dark:bg-slate-800">
                                    <div class="mb-4 flex text-yellow-400" aria-label=format!("{RATING} dari {RATING} bintang")>
                                        {(0..RATING).map(|_| view! { <span aria-hidden="true">"★"</span> }).collect_view()}
                                    </div>
                                    <blockquote class="mb-6 italic text-gray-600 dark:text-gray-300">
                                        {format!("\"{}\"", testimonial.quote)}
                                    </blockquote>
                                    <figcaption class="flex items-center">
                                        <span class="mr-4 flex h-12 w-12 items-center justify-center rounded-full bg-blue-600 font-bold text-white">
                                            {testimonial.initials()}
                                        </span>
                                        <div>
                                            <div class="font-semibold text-gray-900 dark:text-white">{testimonial.name}</div>
                                            <div class="text-sm text-gray-600 dark:text-gray-400">{testimonial.role}</div>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let app_name = use_page().app_name().to_string();
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-900 py-12 text-white">
            <div class="mx-auto grid max-w-7xl gap-8 px-6 md:grid-cols-4">
                <div>
                    <div class="mb-4 flex items-center space-x-3">
                        <img src=LOGO_SRC alt="Tutwurihandayani Logo" class="h-8 w-8 object-contain" />
                        <span class="text-lg font-bold">{app_name.clone()}</span>
                    </div>
                    <p class="text-sm text-gray-400">
                        "Platform digital untuk mengelola administrasi sekolah dengan mudah dan efisien."
                    </p>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div>
                                <h3 class="mb-4 font-semibold">{column.title}</h3>
                                <ul class="space-y-2 text-sm text-gray-400">
                                    {column.entries.iter().map(|entry| view! { <li>{*entry}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="mt-8 border-t border-gray-800 pt-8 text-center text-sm text-gray-400">
                {format!("© {year} {app_name}. {HERO_BADGE}.")}
            </p>
        </footer>
    }
}
