//! # client
//!
//! Leptos + WASM chat widget: a floating button that opens a panel where
//! questions are posted to `/api/ask` and answers are appended as they
//! arrive.
//!
//! The crate is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Sites that do not use the bundled server can call
//! [`mount_widget`] to attach the widget to an existing page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Element id the widget attaches to when embedded in a foreign page.
pub const MOUNT_ELEMENT_ID: &str = "freshman-ai-root";

/// Browser entry point for the server-rendered host page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

/// Mount the widget into `#freshman-ai-root`, or `<body>` when that element
/// is missing.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_widget() {
    use wasm_bindgen::JsCast as _;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("chat widget: no document to mount into");
        return;
    };
    let target = document
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = target else {
        log::error!("chat widget: no mount target");
        return;
    };
    leptos::mount::mount_to(target, components::chat_widget::ChatWidget).forget();
}
