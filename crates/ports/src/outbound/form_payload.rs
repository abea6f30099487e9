//! Transport-neutral multipart form
//!
//! The admin API mixes raw file parts with JSON blobs embedded in text fields.
//! `FormPayload` records the exact part sequence so adapters can reproduce it
//! and tests can inspect it without an HTTP stack.

use confdesk_domain::FileAttachment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(FileAttachment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

/// Ordered multipart parts. Names may repeat (`gallery[]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<FormPart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileAttachment) -> Self {
        self.push_file(name, file);
        self
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: FileAttachment) {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::File(file),
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// First text value stored under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            FormValue::Text(value) if part.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// All files stored under `name`, in order.
    pub fn files(&self, name: &str) -> Vec<&FileAttachment> {
        self.parts
            .iter()
            .filter(|part| part.name == name)
            .filter_map(|part| match &part.value {
                FormValue::File(file) => Some(file),
                FormValue::Text(_) => None,
            })
            .collect()
    }

    /// Part names in send order.
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }
}
