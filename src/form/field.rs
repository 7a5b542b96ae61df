// SPDX-License-Identifier: MPL-2.0
//! Registration form fields and their per-field validation mark.

/// Identifies a named field of the registration form.
///
/// Variants are declared in display order; `Ord` follows that order so maps
/// keyed by `FieldId` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    RollNumber,
    FirstName,
    LastName,
    Institute,
    Stream,
    Year,
    Email,
    PhoneNumber,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Choice from a fixed list of options.
    Select(&'static [&'static str]),
}

pub const STREAM_OPTIONS: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Electronics",
    "Electrical",
    "Mechanical",
    "Civil",
];

pub const YEAR_OPTIONS: &[&str] = &["1st Year", "2nd Year", "3rd Year", "4th Year"];

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::RollNumber,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Institute,
        FieldId::Stream,
        FieldId::Year,
        FieldId::Email,
        FieldId::PhoneNumber,
    ];

    /// Form field name as submitted (`roll_number`, `email`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FieldId::RollNumber => "roll_number",
            FieldId::FirstName => "first_name",
            FieldId::LastName => "last_name",
            FieldId::Institute => "institute",
            FieldId::Stream => "stream",
            FieldId::Year => "year",
            FieldId::Email => "email",
            FieldId::PhoneNumber => "phone_number",
        }
    }

    /// Whether the field takes part in the required-field sweep.
    #[must_use]
    pub fn is_required(self) -> bool {
        true
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Stream => FieldKind::Select(STREAM_OPTIONS),
            FieldId::Year => FieldKind::Select(YEAR_OPTIONS),
            _ => FieldKind::Text,
        }
    }

    fn i18n_stem(self) -> &'static str {
        match self {
            FieldId::RollNumber => "field-roll-number",
            FieldId::FirstName => "field-first-name",
            FieldId::LastName => "field-last-name",
            FieldId::Institute => "field-institute",
            FieldId::Stream => "field-stream",
            FieldId::Year => "field-year",
            FieldId::Email => "field-email",
            FieldId::PhoneNumber => "field-phone-number",
        }
    }

    #[must_use]
    pub fn label_key(self) -> String {
        format!("{}-label", self.i18n_stem())
    }

    #[must_use]
    pub fn placeholder_key(self) -> String {
        format!("{}-placeholder", self.i18n_stem())
    }

    /// Key of the hint shown under an invalid, non-empty field.
    ///
    /// Fields with no format rule only fail when empty, so they share the
    /// generic required hint.
    #[must_use]
    pub fn invalid_hint_key(self) -> String {
        match self {
            FieldId::RollNumber | FieldId::Email | FieldId::PhoneNumber => {
                format!("{}-invalid", self.i18n_stem())
            }
            _ => REQUIRED_HINT_KEY.to_string(),
        }
    }
}

/// Hint shown under an invalid field whose value is empty.
pub const REQUIRED_HINT_KEY: &str = "field-required";

/// Outcome of the last validation attempt for a single field.
///
/// Being an enum, a field can never be marked valid and invalid at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMark {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl ValidationMark {
    #[must_use]
    pub fn is_invalid(self) -> bool {
        self == ValidationMark::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_display_order() {
        let mut sorted = FieldId::ALL;
        sorted.sort();
        assert_eq!(sorted, FieldId::ALL);
    }

    #[test]
    fn only_stream_and_year_are_selects() {
        for field in FieldId::ALL {
            let is_select = matches!(field.kind(), FieldKind::Select(_));
            assert_eq!(is_select, matches!(field, FieldId::Stream | FieldId::Year));
        }
    }

    #[test]
    fn fields_without_format_rule_use_required_hint() {
        assert_eq!(FieldId::Institute.invalid_hint_key(), REQUIRED_HINT_KEY);
        assert_eq!(
            FieldId::Email.invalid_hint_key(),
            "field-email-invalid"
        );
    }

    #[test]
    fn default_mark_is_untouched() {
        assert_eq!(ValidationMark::default(), ValidationMark::Untouched);
    }
}
