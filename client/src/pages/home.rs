//! Host page the server renders around the widget.
//!
//! The widget is meant to float over an existing site; this page is an empty
//! canvas that mounts it so the bundle can be served and exercised on its own.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="host-page">
            <ChatWidget />
        </main>
    }
}
