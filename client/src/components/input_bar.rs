//! Text entry row at the bottom of the chat panel.
//!
//! DESIGN
//! ======
//! The bar owns only its field value. Submission hands the trimmed text to
//! the parent through `on_send`; the parent decides what a send means. The
//! field stays enabled while a reply is pending.

use leptos::prelude::*;

use crate::state::input::{InputState, is_submit_key};

pub const INPUT_PLACEHOLDER: &str = "Type your message...";

#[component]
pub fn InputBar(on_send: Callback<String>) -> impl IntoView {
    let input = RwSignal::new(InputState::default());

    let do_send = move || {
        let mut submitted = None;
        input.update(|i| submitted = i.submit());
        if let Some(text) = submitted {
            on_send.run(text);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let has_text = move || !input.with(|i| i.value.is_empty());

    view! {
        <div class="chat-input">
            <input
                class="chat-input__field"
                class:chat-input__field--filled=has_text
                type="text"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || input.with(|i| i.value.clone())
                on:input=move |ev| input.update(|i| i.set(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button class="chat-input__send" on:click=on_click aria-label="Send message">
                "➤"
            </button>
        </div>
    }
}
