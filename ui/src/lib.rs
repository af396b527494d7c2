pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod sections;

pub use crate::app::App;
pub use crate::content::SiteContent;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::mount::mount_to_body;
    use leptos::prelude::*;

    use crate::app::ContentError;

    console_error_panic_hook::set_once();

    match SiteContent::builtin() {
        Ok(content) => mount_to_body(move || view! { <App content/> }),
        Err(e) => {
            let message = format!("{e:#}");
            leptos::logging::error!("{message}");
            mount_to_body(move || view! { <ContentError message/> })
        }
    }
}
