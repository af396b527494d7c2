use leptos::prelude::*;

use crate::content::{About, Contact, Profile, Project, SkillGroup};
use crate::sections::Section;

pub const HERO_GRADIENT: &str = "linear-gradient(to right, #002f4b, #005c97)";

const HERO_BACKDROP: &str = "absolute inset-0 opacity-20 bg-[url('https://images.unsplash.com/photo-1517512006864-7edc3b933137?q=80&w=2070&auto=format&fit=crop')] bg-cover bg-center";

const H2: &str = "text-2xl md:text-3xl font-bold tracking-tight";
const CARD: &str = "rounded-2xl border border-slate-200 bg-white p-5 shadow-sm";

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let highlight = profile.highlight.map(|name| {
        let note = profile.highlight_note.unwrap_or_default();
        view! {
            " "<span class="font-semibold">{ name }</span>" — "{ note }
        }
    });

    let ghost = "rounded-2xl bg-black/30 px-5 py-3 font-medium ring-1 ring-white/50 hover:bg-black/40";

    view! {
        <section
            id=Section::Home.id()
            class="relative isolate w-full"
            style=format!("background-image: {HERO_GRADIENT}")
        >
            <div class=HERO_BACKDROP/>
            <div class="relative px-4 sm:px-6 py-24 md:py-32 lg:py-40 text-white">
                <div class="max-w-4xl">
                    <p class="uppercase tracking-[0.2em] text-xs md:text-sm opacity-90">{ profile.role }</p>
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight drop-shadow-sm">
                        { profile.headline }
                    </h1>
                    <p class="mt-4 text-base md:text-lg max-w-2xl opacity-95">
                        { profile.intro }
                        { highlight }
                    </p>
                    <div class="mt-8 flex flex-wrap gap-3">
                        <a
                            href=Section::Projects.anchor()
                            class="rounded-2xl bg-white/95 text-slate-900 px-5 py-3 font-medium shadow hover:bg-white"
                        >"View Projects"</a>
                        <a href=Section::Contact.anchor() class=ghost>"Contact"</a>
                        <a href=profile.github_url target="_blank" rel="noreferrer" class=ghost>"GitHub"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let link = "inline-flex items-center gap-2 text-sm font-medium text-indigo-600 hover:underline";

    view! {
        <article class="group rounded-2xl border border-slate-200 bg-white p-5 shadow-sm hover:shadow-md transition-shadow">
            <h3 class="font-semibold text-lg group-hover:text-indigo-600">{ project.title }</h3>
            <p class="mt-2 text-sm text-slate-600">{ project.description }</p>
            <ul class="mt-4 flex flex-wrap gap-2 text-xs text-slate-600">
                { project.tags.into_iter().map(|t| view! {
                    <li class="rounded-full border border-slate-200 px-2 py-1 bg-slate-50">{ t }</li>
                }).collect_view() }
            </ul>
            <div class="mt-4 flex items-center gap-3">
                <a href=project.live_url target="_blank" rel="noreferrer" class=link>"Live"</a>
                <span class="text-slate-300">"•"</span>
                <a href=project.repo_url target="_blank" rel="noreferrer" class=link>"Repo"</a>
            </div>
        </article>
    }
}

/// Cards are keyed by position, so two records may share a title.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="bg-slate-50 border-y border-slate-200 px-4 sm:px-6 py-16">
            <div class="mx-auto max-w-7xl">
                <h2 class=H2>"Projects"</h2>
                <p class="mt-3 text-slate-600">"A selection of recent work. Case studies available on request."</p>
                <div class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || projects.clone().into_iter().enumerate()
                        key=|(i, _): &(usize, Project)| *i
                        children=move |(_, project)| view! { <ProjectCard project/> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="mx-auto max-w-full px-4 sm:px-6 py-16">
            <h2 class=H2>"About"</h2>
            <div class="mt-4 grid md:grid-cols-3 gap-6 items-start">
                <p class="md:col-span-2 text-slate-700 leading-relaxed">{ about.summary }</p>
                <div class=CARD>
                    <h3 class="font-semibold">"Highlights"</h3>
                    <ul class="mt-2 list-disc pl-5 text-sm text-slate-700 space-y-1">
                        { about.highlights.into_iter().map(|h| view! { <li>{ h }</li> }).collect_view() }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(groups: Vec<SkillGroup>) -> impl IntoView {
    let card = move |g: SkillGroup| {
        view! {
            <div class=CARD>
                <h3 class="font-semibold">{ g.name }</h3>
                <ul class="mt-2 text-sm text-slate-700 space-y-1">
                    { g.items.into_iter().map(|i| view! { <li>{ i }</li> }).collect_view() }
                </ul>
            </div>
        }
    };

    view! {
        <section id=Section::Skills.id() class="mx-auto max-w-5xl px-4 sm:px-6 py-16">
            <h2 class=H2>"Skills"</h2>
            <div class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                { groups.into_iter().map(card).collect_view() }
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let tile = "flex items-center justify-center rounded-2xl border border-slate-200 h-12 hover:bg-slate-50";
    let mailto = contact.mailto();

    view! {
        <section id=Section::Contact.id() class="mx-auto max-w-5xl px-4 sm:px-6 py-16">
            <div class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm">
                <h2 class=H2>"Contact"</h2>
                <p class="mt-3 text-slate-600">
                    "Open to opportunities and collaborations. Reach out and I’ll respond quickly."
                </p>
                <div class="mt-6 grid gap-4 sm:grid-cols-2">
                    <a href=mailto class=tile>{ contact.email }</a>
                    <a href=contact.linkedin_url target="_blank" rel="noreferrer" class=tile>"LinkedIn"</a>
                </div>
            </div>
        </section>
    }
}
