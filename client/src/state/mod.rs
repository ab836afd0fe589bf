//! Widget state modules.
//!
//! DESIGN
//! ======
//! `chat` is the conversation owned by the widget root; `input` is the text
//! field owned by the input bar. Both are plain data wrapped in `RwSignal`s by
//! the components that own them.

pub mod chat;
pub mod input;
