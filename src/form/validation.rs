// SPDX-License-Identifier: MPL-2.0
//! Field validation rules and the submit-time validation pass.
//!
//! Every rule is checked against the trimmed value. The email rule is a loose
//! structural check, not RFC 5322 validation.

use super::field::{FieldId, ValidationMark};
use super::snapshot::FormSnapshot;
use crate::config::PHONE_NUMBER_DIGITS;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// One or more ASCII letters or digits.
static ROLL_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+$").expect("roll number pattern should compile")
});

/// `local@domain.tld` where no part contains whitespace or `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Exactly `PHONE_NUMBER_DIGITS` ASCII digits. `\d` would also accept
/// non-ASCII decimal digits.
static PHONE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[0-9]{{{PHONE_NUMBER_DIGITS}}}$")).expect("phone pattern should compile")
});

#[must_use]
pub fn is_valid_roll_number(value: &str) -> bool {
    ROLL_NUMBER_REGEX.is_match(value.trim())
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

#[must_use]
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(value.trim())
}

/// Fields that failed validation, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldId>);

impl FieldErrors {
    #[must_use]
    pub fn fields(&self) -> &[FieldId] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.name()).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

/// Marks produced by one validation pass over a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    marks: BTreeMap<FieldId, ValidationMark>,
}

impl ValidationReport {
    #[must_use]
    pub fn mark(&self, field: FieldId) -> ValidationMark {
        self.marks.get(&field).copied().unwrap_or_default()
    }

    pub fn marks(&self) -> impl Iterator<Item = (FieldId, ValidationMark)> + '_ {
        self.marks.iter().map(|(field, mark)| (*field, *mark))
    }

    /// Aggregate validity: no field ended up invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.marks.values().any(|mark| mark.is_invalid())
    }

    #[must_use]
    pub fn invalid_fields(&self) -> FieldErrors {
        FieldErrors(
            self.marks
                .iter()
                .filter(|(_, mark)| mark.is_invalid())
                .map(|(field, _)| *field)
                .collect(),
        )
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.invalid_fields())
        }
    }

    fn set(&mut self, field: FieldId, valid: bool) {
        let mark = if valid {
            ValidationMark::Valid
        } else {
            ValidationMark::Invalid
        };
        self.marks.insert(field, mark);
    }
}

/// Runs the full submit-time validation over `snapshot`.
///
/// Format rules run first. The required sweep then marks blank fields
/// invalid and marks the remaining fields valid unless a format rule already
/// marked them invalid.
#[must_use]
pub fn validate(snapshot: &FormSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.set(
        FieldId::RollNumber,
        is_valid_roll_number(snapshot.get(FieldId::RollNumber)),
    );
    report.set(FieldId::Email, is_valid_email(snapshot.get(FieldId::Email)));
    report.set(
        FieldId::PhoneNumber,
        is_valid_phone_number(snapshot.get(FieldId::PhoneNumber)),
    );

    for field in FieldId::ALL.into_iter().filter(|f| f.is_required()) {
        if snapshot.is_blank(field) {
            report.set(field, false);
        } else if !report.mark(field).is_invalid() {
            report.set(field, true);
        }
    }

    report
}
