//! Widget component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` is the stateful root; every other component is presentational
//! and receives its data through props.

pub mod ai_message;
pub mod chat_header;
pub mod chat_widget;
pub mod human_message;
pub mod input_bar;
pub mod loading_message;
