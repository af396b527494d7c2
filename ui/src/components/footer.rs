use leptos::prelude::*;

use crate::sections::Section;

#[component]
pub fn SiteFooter(owner: String, year: i32) -> impl IntoView {
    let links = Section::NAV.iter().enumerate().map(|(i, s)| {
        view! {
            { (i > 0).then(|| view! { <span class="text-slate-300">"•"</span> }) }
            <a href=s.anchor() class="hover:text-indigo-600">{ s.label() }</a>
        }
    });

    view! {
        <footer class="mt-auto border-t border-slate-200 bg-white/70">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 py-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-slate-600">{ format!("© {year} {owner}") }</p>
                <div class="flex items-center gap-3 text-sm">
                    { links.collect_view() }
                </div>
            </div>
        </footer>
    }
}
