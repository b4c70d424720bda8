//! Field validation with full failure accumulation.
//!
//! This module contains the validation layer of the form:
//! - Typed field identifiers, raw values, and the draft value set
//! - The violation taxonomy (required, invalid email, too short)
//! - Check functions that accumulate ALL failures using Validation
//!   rather than stopping at the first offending field

mod fields;
mod rules;
mod violations;

pub use fields::{FieldId, FieldSet, FieldValue, UnknownField};
pub use rules::{check_field, is_valid_email, validate_all, validate_step, FieldValidation};
pub use violations::FieldViolation;
