//! Message row for text the user sent.

#[cfg(test)]
#[path = "human_message_test.rs"]
mod human_message_test;

use leptos::prelude::*;

/// Human message bubble, right aligned. Text is shown verbatim.
#[component]
pub fn HumanMessage(text: String, #[prop(optional_no_strip)] time: Option<String>) -> impl IntoView {
    view! {
        <div class="chat-row chat-row--human">
            <div class="chat-bubble chat-bubble--human">
                <span>{text}</span>
                {time.map(|t| view! { <span class="chat-bubble__time">{t}</span> })}
            </div>
        </div>
    }
}
