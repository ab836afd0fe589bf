//! Local value of the input bar and its submit rule.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Text-entry state for [`crate::components::input_bar::InputBar`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub value: String,
}

impl InputState {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Take the trimmed value for sending and clear the field.
    ///
    /// Blank input is left untouched and yields `None`.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.value.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();
        self.value.clear();
        Some(text)
    }
}

/// Only Enter submits; every other key is ordinary text entry.
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}
