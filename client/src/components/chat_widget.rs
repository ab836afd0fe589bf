//! Floating chat widget: toggle button plus the chat panel it opens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Root of the widget. Owns the conversation state, runs the send flow, and
//! composes header, message list, and input bar.
//!
//! DESIGN
//! ======
//! A send appends the user's line synchronously, then awaits one `/api/ask`
//! call on the browser task queue. Sends are not serialized; see
//! `state::chat` for how overlapping replies land.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::ai_message::AiMessage;
use crate::components::chat_header::ChatHeader;
use crate::components::human_message::HumanMessage;
use crate::components::input_bar::InputBar;
use crate::components::loading_message::LoadingMessage;
use crate::net::api::{AskError, ask};
use crate::state::chat::{ChatRow, ChatState, Sender};
use crate::util::clock::now_label;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.with(|c| {
            let _ = (c.open, c.messages.len(), c.loading);
        });

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_send = Callback::new(move |text: String| {
        if let Some(task) = send_message(chat, &text, |query| async move { ask(&query).await }) {
            leptos::task::spawn_local(task);
        }
    });

    let on_toggle = move |_| chat.update(ChatState::toggle);
    let is_open = move || chat.with(|c| c.open);

    view! {
        <div class="chat-widget">
            <Show when=is_open>
                <div class="chat-panel" role="dialog" aria-label="Chat">
                    <ChatHeader />
                    <div class="chat-panel__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(|c| {
                                c.rows()
                                    .into_iter()
                                    .map(|row| match row {
                                        ChatRow::Message(msg) => match msg.sender {
                                            Sender::Ai => {
                                                view! { <AiMessage text=msg.text.clone() time=msg.time.clone() /> }
                                                    .into_any()
                                            }
                                            Sender::Human => {
                                                view! { <HumanMessage text=msg.text.clone() time=msg.time.clone() /> }
                                                    .into_any()
                                            }
                                        },
                                        ChatRow::Loading => view! { <LoadingMessage /> }.into_any(),
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </div>
                    <InputBar on_send=on_send />
                </div>
            </Show>
            <button class="chat-toggle" on:click=on_toggle aria-label="Open chat">
                "💬"
            </button>
        </div>
    }
}

/// Record `text` as an outgoing message and return the task that asks for
/// the reply, or `None` when `text` is blank.
///
/// The human line and in-flight flag are applied before this returns; the
/// task only awaits `ask_fn` and appends its outcome.
pub(crate) fn send_message<F, Fut>(chat: RwSignal<ChatState>, text: &str, ask_fn: F) -> Option<impl Future<Output = ()> + use<F, Fut>>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, AskError>>,
{
    let mut query = None;
    chat.update(|c| query = c.begin_send(text, now_label()));
    let reply = ask_fn(query?);

    Some(async move {
        let outcome = reply.await;
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = &outcome {
                log::warn!("{e}");
            }
        }
        // The widget may have been unmounted while the request was pending.
        let _ = chat.try_update(|c| c.finish_send(outcome, now_label()));
    })
}
