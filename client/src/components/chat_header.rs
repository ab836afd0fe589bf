//! Static banner at the top of the chat panel.

use leptos::prelude::*;

pub const HEADER_TITLE: &str = "Duke Dog AI";
pub const HEADER_SUBTITLE: &str = "Not affiliated with JMU";

#[component]
pub fn ChatHeader() -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-header__title">
                <span aria-hidden="true">"🤖"</span>
                {HEADER_TITLE}
            </div>
            <div class="chat-header__subtitle">{HEADER_SUBTITLE}</div>
        </header>
    }
}
