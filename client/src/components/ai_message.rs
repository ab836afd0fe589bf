//! Message row for replies from the assistant.

#[cfg(test)]
#[path = "ai_message_test.rs"]
mod ai_message_test;

use leptos::prelude::*;

use crate::util::markdown::render_inline_markdown;

/// AI reply bubble with the robot avatar; text is rendered as light Markdown.
#[component]
pub fn AiMessage(text: String, #[prop(optional_no_strip)] time: Option<String>) -> impl IntoView {
    let rendered = render_inline_markdown(&text);

    view! {
        <div class="chat-row chat-row--ai">
            <span class="chat-row__avatar" aria-hidden="true">"🤖"</span>
            <div class="chat-bubble chat-bubble--ai">
                <div class="chat-bubble__markdown" inner_html=rendered></div>
                {time.map(|t| view! { <span class="chat-bubble__time">{t}</span> })}
            </div>
        </div>
    }
}
