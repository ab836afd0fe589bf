//! Widget conversation state: visibility, message sequence, in-flight flag.
//!
//! DESIGN
//! ======
//! The send flow is split into `begin_send` (optimistic human append, runs
//! synchronously in the submit handler) and `finish_send` (reply or fallback
//! append, runs when the request resolves). Components hold this struct in an
//! `RwSignal`; everything here stays plain data so it can be tested natively.
//!
//! CONCURRENCY
//! ===========
//! Submissions are not serialized. Two sends in a row issue two requests and
//! each reply is appended when its own request resolves, in arrival order.
//! `loading` is a single flag, so the first resolution clears it even if the
//! other request is still pending.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::AskError;

/// Opening line shown by a freshly mounted widget.
pub const GREETING: &str = "Hello! How can I help you today?";

/// Fallback reply appended when a request fails for any reason.
pub const SEND_FAILED_MESSAGE: &str = "Sorry, there was an error contacting the AI.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Human,
    Ai,
}

/// A single line in the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Display-only time of day; never used for ordering.
    pub time: Option<String>,
}

impl ChatMessage {
    pub fn human(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Human, time: None }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Ai, time: None }
    }

    #[must_use]
    pub fn with_time(mut self, time: Option<String>) -> Self {
        self.time = time;
        self
    }
}

/// One rendered row of the message list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRow<'a> {
    Message(&'a ChatMessage),
    /// Transient indicator shown while a request is outstanding.
    Loading,
}

/// State owned by the widget root for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { open: false, messages: vec![ChatMessage::ai(GREETING)], loading: false }
    }
}

impl ChatState {
    /// State with no seeded greeting.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self { open: false, messages: Vec::new(), loading: false }
    }

    /// Flip the panel between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Record an outgoing message and mark a request as in flight.
    ///
    /// Returns the query to send, or `None` when `text` is blank (in which
    /// case nothing changes).
    pub fn begin_send(&mut self, text: &str, time: Option<String>) -> Option<String> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::human(query).with_time(time));
        self.loading = true;
        Some(query.to_owned())
    }

    /// Append the outcome of a request and clear the in-flight flag.
    pub fn finish_send(&mut self, outcome: Result<String, AskError>, time: Option<String>) {
        let text = outcome.unwrap_or_else(|_| SEND_FAILED_MESSAGE.to_owned());
        self.messages.push(ChatMessage::ai(text).with_time(time));
        self.loading = false;
    }

    /// Rows to render: every stored message, then a loading row if in flight.
    pub fn rows(&self) -> Vec<ChatRow<'_>> {
        let mut rows: Vec<ChatRow<'_>> = self.messages.iter().map(ChatRow::Message).collect();
        if self.loading {
            rows.push(ChatRow::Loading);
        }
        rows
    }
}
