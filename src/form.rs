//! Form state for the search fields
//!
//! Holds the deployment's ordered field set and the current value of each
//! field. Every value starts empty, no field is required, and values are
//! stored exactly as typed (no trimming, no validation).

use crate::config::FieldSpec;

/// A single form field with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// Ordered form state plus a focus cursor for the TUI
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<Field>,
    focused: usize,
}

impl FormState {
    /// Create a form from the configured field set, all values empty
    pub fn new(specs: &[FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| Field {
                name: spec.name.clone(),
                label: spec.label.clone(),
                value: String::new(),
            })
            .collect();

        Self { fields, focused: 0 }
    }

    /// Replace a field's value. Unknown field names are ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
    }

    /// Current value of a field, if the name is recognized
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// All `(name, value)` pairs in declared field order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|f| (f.name.as_str(), f.value.as_str()))
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }

    /// Index of the focused field
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Move focus to the next field, wrapping at the end
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    /// Move focus to the previous field, wrapping at the start
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    /// Clear the focused field
    pub fn clear_focused(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.clear();
        }
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
