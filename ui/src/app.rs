use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::footer::SiteFooter;
use crate::components::nav::SiteNav;
use crate::content::SiteContent;
use crate::pages::portfolio::{AboutSection, ContactSection, Hero, ProjectsSection, SkillsSection};

const BODY_BACKGROUND: &str = "#f8fafc"; // slate-50

fn paint_body() {
    let Some(body) = document().body() else {
        leptos::logging::warn!("no <body> to style");
        return;
    };
    let style = body.style();
    if style.set_property("background", BODY_BACKGROUND).is_err()
        || style.set_property("overflow-x", "hidden").is_err()
    {
        leptos::logging::warn!("could not style <body>");
    }
}

#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    provide_meta_context();

    Effect::new(move |_| paint_body());

    let year = chrono::Local::now().year();
    let SiteContent { profile, projects, about, skills, contact } = content;
    let title = format!("{} • Portfolio", profile.name);
    let description = format!("{} — {}", profile.name, profile.role);
    let brand = profile.short_name.clone();
    let owner = profile.name.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <div class="min-h-screen flex flex-col text-slate-900">
            <a
                href="#main"
                class="sr-only focus:not-sr-only focus:fixed focus:top-2 focus:left-2 focus:z-50 bg-white/90 px-3 py-2 rounded-md shadow"
            >"Skip to main content"</a>

            <SiteNav brand/>
            <Hero profile/>

            <main id="main" class="flex-1">
                <ProjectsSection projects/>
                <AboutSection about/>
                <SkillsSection groups=skills/>
                <ContactSection contact/>
            </main>

            <SiteFooter owner year/>
        </div>
    }
}

/// Shown instead of the page when the bundled content doesn't load.
#[component]
pub fn ContentError(message: String) -> impl IntoView {
    view! {
        <div class="max-w-xl mx-auto mt-16 rounded-lg border border-red-200 bg-red-50 p-6 text-red-800">
            <h1 class="text-xl font-semibold mb-2">"Site content failed to load"</h1>
            <pre class="whitespace-pre-wrap text-sm">{ message }</pre>
        </div>
    }
}
