//! Transient "typing" row shown while a reply is pending.

use leptos::prelude::*;

/// Three bouncing dots inside an AI-styled bubble.
#[component]
pub fn LoadingMessage() -> impl IntoView {
    view! {
        <div class="chat-row chat-row--ai chat-row--loading" aria-live="polite" aria-label="Waiting for reply">
            <span class="chat-row__avatar" aria-hidden="true">"🤖"</span>
            <div class="chat-bubble chat-bubble--ai">
                <div class="chat-loader">
                    <span class="chat-loader__dot"></span>
                    <span class="chat-loader__dot"></span>
                    <span class="chat-loader__dot"></span>
                </div>
            </div>
        </div>
    }
}
