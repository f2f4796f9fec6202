use leptos::*;
use leptos_meta::{Meta, Title};

pub mod content;
mod sections;

use sections::{About, Features, Footer, Hero, NavBar, Testimonials};

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <Title text=content::WELCOME_TITLE />
        <Meta
            name="description"
            content="Sistem Informasi Manajemen Sekolah SMA - Platform digital untuk mengelola administrasi sekolah dengan mudah dan efisien"
        />
        <div class="relative min-h-screen overflow-hidden bg-gradient-to-br from-blue-50 via-white to-blue-100 dark:from-slate-900 dark:via-slate-800 dark:to-blue-900">
            <NavBar />
            <Hero />
            <About />
            <Features />
            <Testimonials />
            <Footer />
        </div>
    }
}
