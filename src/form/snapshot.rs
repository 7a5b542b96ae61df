// SPDX-License-Identifier: MPL-2.0
//! Current values of the form fields.

use super::field::FieldId;
use std::collections::BTreeMap;

/// Values of the named fields at a point in time.
///
/// Missing entries read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, String>,
}

impl FormSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful in tests.
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw (untrimmed) value of `field`.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Whether the trimmed value of `field` is empty.
    #[must_use]
    pub fn is_blank(&self, field: FieldId) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
