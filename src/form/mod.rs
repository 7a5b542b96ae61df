// SPDX-License-Identifier: MPL-2.0
//! Registration form domain: fields, validation and the controller that
//! ties them to previews, timers and the success dialog.

pub mod controller;
pub mod dialog;
pub mod field;
pub mod snapshot;
pub mod timers;
pub mod validation;

pub use controller::{FileSelection, FormController, SubmitOutcome, SubmitStatus};
pub use dialog::SuccessDialog;
pub use field::{FieldId, FieldKind, ValidationMark};
pub use snapshot::FormSnapshot;
pub use validation::{validate, FieldErrors, ValidationReport};
