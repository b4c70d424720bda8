//! Validation rules for form fields using Validation.

use crate::core::Step;
use crate::validation::fields::{FieldId, FieldSet};
use crate::validation::violations::FieldViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for the result of a validation pass.
pub type FieldValidation = Validation<(), NonEmptyVec<FieldViolation>>;

/// Check a single field against the draft.
///
/// This is the eager contract the presentation layer invokes when a field
/// loses focus, and the unit every gate check is built from. A field
/// yields at most one violation, checked in priority order: presence for
/// required fields, then email shape, then minimum length.
pub fn check_field(fields: &FieldSet, field: FieldId) -> FieldValidation {
    if field.is_required() {
        let present = if field.is_checkbox() {
            fields.is_checked(field)
        } else {
            fields.trimmed(field).is_some()
        };
        if !present {
            return Validation::fail(FieldViolation::Required { field });
        }
    }

    let Some(text) = fields.trimmed(field) else {
        // Optional field left blank: nothing to check
        return Validation::success(());
    };

    if field.is_email() && !is_valid_email(text) {
        return Validation::fail(FieldViolation::InvalidEmail { field });
    }

    if let Some(min) = field.min_len() {
        if text.chars().count() < min {
            return Validation::fail(FieldViolation::TooShort { field, min });
        }
    }

    Validation::success(())
}

/// Validate every field of one step, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when the whole step passes, or a
/// failure carrying one violation per offending field so the caller can
/// surface them all at once rather than one per attempt.
pub fn validate_step(step: Step, fields: &FieldSet) -> FieldValidation {
    let checks: Vec<FieldValidation> = FieldId::for_step(step)
        .map(|field| check_field(fields, field))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Validate every field of every step, accumulating ALL violations.
///
/// The submission gate runs this so the assembled record's invariants
/// hold even if an earlier step's field was edited after it validated.
pub fn validate_all(fields: &FieldSet) -> FieldValidation {
    let checks: Vec<FieldValidation> = FieldId::ALL
        .into_iter()
        .map(|field| check_field(fields, field))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Check the `local@domain.tld` shape: no whitespace, a single `@` with
/// a non-empty local part, and at least one `.` inside the domain with
/// characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
