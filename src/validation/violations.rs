//! Field violation errors.

use crate::validation::fields::FieldId;
use thiserror::Error;

/// Why a single field failed validation.
///
/// Each violation names the offending field so the presentation layer
/// can route the message to the right input. A field yields at most one
/// violation per check; a step may yield many, one per offending field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldViolation {
    #[error("Field '{field}' is required")]
    Required { field: FieldId },

    #[error("Field '{field}' must be a valid email address")]
    InvalidEmail { field: FieldId },

    #[error("Field '{field}' must be at least {min} characters")]
    TooShort { field: FieldId, min: usize },
}

impl FieldViolation {
    /// The field this violation applies to.
    pub fn field(&self) -> FieldId {
        match self {
            Self::Required { field } => *field,
            Self::InvalidEmail { field } => *field,
            Self::TooShort { field, .. } => *field,
        }
    }
}
