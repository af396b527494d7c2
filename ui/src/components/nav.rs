use leptos::prelude::*;

use crate::components::menu::{MenuEvent, MenuState};
use crate::sections::Section;

pub const PANEL_ID: &str = "mobile-nav";

const ICON_OPEN: &str = "M4 7h16a1 1 0 1 0 0-2H4a1 1 0 1 0 0 2zm16 6H4a1 1 0 1 0 0 2h16a1 1 0 1 0 0-2zm0 6H4a1 1 0 1 0 0 2h16a1 1 0 1 0 0-2z";
const ICON_CLOSE: &str = "M6.225 4.811a1 1 0 0 1 1.414 0L12 9.172l4.361-4.361a1 1 0 0 1 1.414 1.414L13.414 10.586l4.361 4.361a1 1 0 1 1-1.414 1.414L12 12l-4.361 4.361a1 1 0 0 1-1.414-1.414L10.586 10.586 6.225 6.225a1 1 0 0 1 0-1.414Z";

/// Icon shown on the toggle: hamburger while closed, a cross while open.
pub fn toggle_icon(state: MenuState) -> &'static str {
    if state.is_open() { ICON_CLOSE } else { ICON_OPEN }
}

#[component]
fn NavLink(
    section: Section,
    menu: RwSignal<MenuState>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <a
            href=section.anchor()
            class=class
            on:click=move |_| { menu.maybe_update(|m| m.apply(MenuEvent::LinkActivated)); }
        >
            { label.unwrap_or(section.label()) }
        </a>
    }
}

#[component]
fn MobilePanel(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <div id=PANEL_ID class="md:hidden border-t border-slate-200 bg-white/95">
            <nav class="mx-auto max-w-7xl px-4 sm:px-6 py-4 grid gap-2 text-sm">
                <For
                    each=move || Section::NAV
                    key=|s| *s
                    children=move |section| view! { <NavLink section menu class="py-2"/> }
                />
                <NavLink
                    section=Section::Contact
                    menu
                    label="Hire Me"
                    class="py-2 inline-flex items-center justify-center rounded-2xl bg-indigo-600 text-white h-10"
                />
            </nav>
        </div>
    }
}

#[component]
pub fn SiteNav(brand: String) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    // released together with this component's owner; no window to listen on off wasm
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::ev::keydown;
        use leptos_use::{use_event_listener, use_window};

        let _ = use_event_listener(use_window(), keydown, move |ev: web_sys::KeyboardEvent| {
            if let Some(event) = MenuEvent::from_key(&ev.key()) {
                menu.maybe_update(|m| m.apply(event));
            }
        });
    }

    let link_class = "px-2 py-1.5 rounded-md hover:text-indigo-600 focus:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500";

    view! {
        <header class="sticky top-0 z-40 border-b border-slate-200 bg-white/80 backdrop-blur">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 h-16 flex items-center justify-between">
                <a href=Section::Home.anchor() class="flex items-center gap-2 font-semibold tracking-tight">
                    <span class="inline-block h-8 w-8 rounded-xl bg-gradient-to-br from-sky-500 to-indigo-600"/>
                    <span>{ format!("{brand} • Portfolio") }</span>
                </a>

                <nav class="hidden md:flex items-center gap-4 text-sm">
                    <For
                        each=move || Section::NAV
                        key=|s| *s
                        children=move |section| view! { <NavLink section menu class=link_class/> }
                    />
                    <a
                        href=Section::Contact.anchor()
                        class="ml-2 inline-flex items-center rounded-2xl px-4 h-10 bg-indigo-600 text-white hover:bg-indigo-700 shadow-sm"
                    >"Hire Me"</a>
                </nav>

                <button
                    aria-label="Toggle menu"
                    aria-controls=PANEL_ID
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| { menu.maybe_update(|m| m.apply(MenuEvent::Toggle)); }
                    class="md:hidden inline-flex items-center justify-center h-10 w-10 rounded-xl border border-slate-200 hover:bg-slate-100"
                >
                    <svg viewBox="0 0 24 24" fill="currentColor" class="h-5 w-5">
                        <path fill-rule="evenodd" d=move || toggle_icon(menu.get())/>
                    </svg>
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <MobilePanel menu/>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_state() {
        let mut menu = MenuState::default();
        assert_eq!(toggle_icon(menu), ICON_OPEN);
        menu.toggle();
        assert_eq!(toggle_icon(menu), ICON_CLOSE);
    }
}
