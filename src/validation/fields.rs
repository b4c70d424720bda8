//! Typed form fields and the raw values a signer enters into them.
//!
//! The identifier set is closed: every field the form collects is listed
//! here along with the policy (owning step, required flag, shape checks)
//! that drives validation. Callers keyed by string identifiers parse them
//! through `FromStr`; an unknown identifier is an explicit error, never
//! silently ignored.

use crate::core::Step;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of one form field.
///
/// # Example
///
/// ```rust
/// use signwall::{FieldId, Step};
///
/// assert_eq!(FieldId::FullName.step(), Step::Identity);
/// assert!(FieldId::FullName.is_required());
/// assert!(!FieldId::Email.is_required());
/// assert_eq!("consent".parse::<FieldId>(), Ok(FieldId::Consent));
/// assert!("particles".parse::<FieldId>().is_err());
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// The signer's full name (identity step, required, min 2 chars)
    FullName,
    /// The signer's country (identity step, required)
    Country,
    /// In-game handle (contact step, optional)
    Gamertag,
    /// Contact email (contact step, optional, shape-checked when present)
    Email,
    /// Free-text comment (consent step, optional)
    Comment,
    /// Consent checkbox (consent step, required)
    Consent,
}

impl FieldId {
    /// Every field the form collects, in display order.
    pub const ALL: [FieldId; 6] = [
        FieldId::FullName,
        FieldId::Country,
        FieldId::Gamertag,
        FieldId::Email,
        FieldId::Comment,
        FieldId::Consent,
    ];

    /// The field's string identifier, as used by string-keyed callers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Country => "country",
            Self::Gamertag => "gamertag",
            Self::Email => "email",
            Self::Comment => "comment",
            Self::Consent => "consent",
        }
    }

    /// The form step this field belongs to.
    pub fn step(&self) -> Step {
        match self {
            Self::FullName | Self::Country => Step::Identity,
            Self::Gamertag | Self::Email => Step::Contact,
            Self::Comment | Self::Consent => Step::Consent,
        }
    }

    /// Whether the field must be filled (or checked) for its step to pass.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::FullName | Self::Country | Self::Consent)
    }

    /// Whether the field is a checkbox rather than a text input.
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Consent)
    }

    /// Whether a non-empty value must have the `local@domain.tld` shape.
    pub fn is_email(&self) -> bool {
        matches!(self, Self::Email)
    }

    /// Minimum trimmed length for a non-empty value, if any.
    pub fn min_len(&self) -> Option<usize> {
        match self {
            Self::FullName => Some(2),
            _ => None,
        }
    }

    /// The fields belonging to one step, in display order.
    pub fn for_step(step: Step) -> impl Iterator<Item = FieldId> {
        Self::ALL.into_iter().filter(move |field| field.step() == step)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an identifier outside the closed field set.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown field identifier '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw value of one form field: text for inputs and selects, a flag for
/// checkboxes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Checked(_) => None,
        }
    }

    /// Whether this is a ticked checkbox.
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(true))
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

/// The draft values a signer has entered so far, keyed by field.
///
/// Setting a value never validates it; validation happens at the
/// controller's gates and on the eager per-field check.
///
/// # Example
///
/// ```rust
/// use signwall::{FieldId, FieldSet};
///
/// let draft = FieldSet::new()
///     .with(FieldId::FullName, "  Ada Lovelace  ")
///     .with(FieldId::Consent, true);
///
/// assert_eq!(draft.trimmed(FieldId::FullName), Some("Ada Lovelace"));
/// assert!(draft.is_checked(FieldId::Consent));
/// assert_eq!(draft.trimmed(FieldId::Email), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    values: BTreeMap<FieldId, FieldValue>,
}

impl FieldSet {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Store a value, replacing any previous one for the field.
    pub fn set(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style `set`, for fluent construction.
    pub fn with(mut self, field: FieldId, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// The stored value, if any.
    pub fn get(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// The stored text, trimmed, or `None` when absent, blank, or not a
    /// text value. Validation and record assembly both read through this.
    pub fn trimmed(&self, field: FieldId) -> Option<&str> {
        self.values
            .get(&field)
            .and_then(FieldValue::as_text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Whether the field holds a ticked checkbox.
    pub fn is_checked(&self, field: FieldId) -> bool {
        self.values.get(&field).is_some_and(FieldValue::is_checked)
    }

    /// Discard every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for step in [Step::Identity, Step::Contact, Step::Consent] {
            assert_eq!(FieldId::for_step(step).count(), 2);
        }
        assert_eq!(FieldId::ALL.len(), 6);
    }

    #[test]
    fn required_fields_are_name_country_consent() {
        let required: Vec<_> = FieldId::ALL
            .into_iter()
            .filter(FieldId::is_required)
            .collect();
        assert_eq!(
            required,
            vec![FieldId::FullName, FieldId::Country, FieldId::Consent]
        );
    }

    #[test]
    fn identifier_roundtrips_through_strings() {
        for field in FieldId::ALL {
            assert_eq!(field.name().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn unknown_identifier_is_an_explicit_error() {
        let err = "confetti".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownField("confetti".to_string()));
        assert_eq!(err.to_string(), "Unknown field identifier 'confetti'");
    }

    #[test]
    fn trimmed_collapses_blank_text_to_none() {
        let draft = FieldSet::new()
            .with(FieldId::FullName, "   ")
            .with(FieldId::Country, " México ");

        assert_eq!(draft.trimmed(FieldId::FullName), None);
        assert_eq!(draft.trimmed(FieldId::Country), Some("México"));
        assert_eq!(draft.trimmed(FieldId::Comment), None);
    }

    #[test]
    fn trimmed_ignores_checkbox_values() {
        let draft = FieldSet::new().with(FieldId::Consent, true);
        assert_eq!(draft.trimmed(FieldId::Consent), None);
        assert!(draft.is_checked(FieldId::Consent));
    }

    #[test]
    fn unchecked_and_absent_checkboxes_read_the_same() {
        let draft = FieldSet::new().with(FieldId::Consent, false);
        assert!(!draft.is_checked(FieldId::Consent));
        assert!(!FieldSet::new().is_checked(FieldId::Consent));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut draft = FieldSet::new();
        draft.set(FieldId::FullName, "Ada");
        draft.set(FieldId::FullName, "Grace");
        assert_eq!(draft.trimmed(FieldId::FullName), Some("Grace"));
    }

    #[test]
    fn clear_discards_everything() {
        let mut draft = FieldSet::new()
            .with(FieldId::FullName, "Ada")
            .with(FieldId::Consent, true);
        draft.clear();
        assert_eq!(draft, FieldSet::new());
    }

    #[test]
    fn field_set_serializes_correctly() {
        let draft = FieldSet::new()
            .with(FieldId::FullName, "Ada")
            .with(FieldId::Consent, true);

        let json = serde_json::to_string(&draft).unwrap();
        let deserialized: FieldSet = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, deserialized);
    }
}
