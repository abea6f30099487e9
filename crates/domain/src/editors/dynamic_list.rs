//! Generic editor for an ordered list of free-text strings
//!
//! Used for subthemes, workshops, and important dates. Important dates are
//! free text: nothing here parses or validates dates.

/// Result of routing a key press through the list's input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was handled (Enter); the host must not submit the enclosing form.
    Consumed,
    /// Not ours; let the host handle it.
    Ignored,
}

/// An ordered, mutable list of strings plus its pending input text.
///
/// Only [`DynamicList::add_item`] trims. `update_item` stores what it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicList {
    items: Vec<String>,
    input: String,
}

impl DynamicList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List holding a single empty slot, the initial state of the wizard's lists.
    pub fn with_blank_slot() -> Self {
        Self::from_items(vec![String::new()])
    }

    pub fn from_items(items: Vec<String>) -> Self {
        Self {
            items,
            input: String::new(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append the trimmed input and clear it.
    ///
    /// A blank input is a no-op that leaves the typed text in place.
    /// Returns whether an item was appended.
    pub fn add_item(&mut self) -> bool {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        self.input.clear();
        true
    }

    /// Remove by position. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Replace in place without trimming.
    pub fn update_item(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Enter adds the pending input.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if key == "Enter" {
            self.add_item();
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Ignored
        }
    }
}

impl From<Vec<String>> for DynamicList {
    fn from(items: Vec<String>) -> Self {
        Self::from_items(items)
    }
}
