use std::cell::Cell;

use super::*;
use crate::state::chat::{GREETING, SEND_FAILED_MESSAGE};

fn texts(chat: RwSignal<ChatState>) -> Vec<(Sender, String)> {
    chat.with_untracked(|c| c.messages.iter().map(|m| (m.sender, m.text.clone())).collect())
}

#[test]
fn successful_send_appends_question_then_answer() {
    Owner::new().with(|| {
        let chat = RwSignal::new(ChatState::default());
        let task = send_message(chat, "When is orientation?", |query| async move {
            assert_eq!(query, "When is orientation?");
            Ok("Orientation is August 20.".to_owned())
        })
        .expect("non-blank text starts a send");

        assert!(chat.with_untracked(|c| c.loading));
        assert_eq!(texts(chat).len(), 2);

        futures::executor::block_on(task);

        assert!(!chat.with_untracked(|c| c.loading));
        assert_eq!(
            texts(chat),
            vec![
                (Sender::Ai, GREETING.to_owned()),
                (Sender::Human, "When is orientation?".to_owned()),
                (Sender::Ai, "Orientation is August 20.".to_owned()),
            ]
        );
    });
}

#[test]
fn failed_send_appends_fallback_message() {
    Owner::new().with(|| {
        let chat = RwSignal::new(ChatState::default());
        let task = send_message(chat, "hello", |_| async { Err(AskError::Status(502)) }).expect("send starts");
        futures::executor::block_on(task);

        let messages = texts(chat);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], (Sender::Ai, SEND_FAILED_MESSAGE.to_owned()));
        assert!(!chat.with_untracked(|c| c.loading));
    });
}

#[test]
fn blank_send_never_calls_ask() {
    Owner::new().with(|| {
        let chat = RwSignal::new(ChatState::default());
        let called = Cell::new(false);
        let task = send_message(chat, "   ", |_| {
            called.set(true);
            async { Ok(String::new()) }
        });

        assert!(task.is_none());
        assert!(!called.get());
        assert_eq!(texts(chat), vec![(Sender::Ai, GREETING.to_owned())]);
        assert!(!chat.with_untracked(|c| c.loading));
    });
}
