//! Signwall: a pure functional petition signing core
//!
//! Signwall implements the state that drives an interactive petition page:
//! a three-step signature form, per-field validation that reports every
//! offending field at once, and an in-memory, newest-first wall of
//! collected signatures. The core is composed of pure functions and owned
//! values with no rendering logic; a presentation layer calls into it and
//! draws whatever it returns.
//!
//! # Core Concepts
//!
//! - **Step**: one of three ordered form stages (identity, contact,
//!   consent), advanced and retreated one at a time
//! - **Validation**: per-field checks that accumulate all failures
//!   instead of stopping at the first
//! - **SignatureStore**: the session's signatures, newest first, with
//!   derived count and goal progress
//!
//! # Example
//!
//! ```rust
//! use signwall::{FieldId, SignatureStore, Step, StepFormController};
//!
//! let mut form = StepFormController::new();
//! form.set_field(FieldId::FullName, "Ada Lovelace");
//! form.set_field(FieldId::Country, "United Kingdom");
//!
//! assert_eq!(form.advance().expect("identity step is valid"), Step::Contact);
//! assert_eq!(form.advance().expect("contact fields are optional"), Step::Consent);
//!
//! form.set_field(FieldId::Consent, true);
//! let record = form.submit().expect("all steps are valid");
//! assert_eq!(record.name, "Ada Lovelace");
//! assert_eq!(form.current_step(), Step::Identity);
//!
//! let mut wall = SignatureStore::new();
//! assert_eq!(wall.add(record), 1);
//! assert_eq!(wall.recent(10).len(), 1);
//! ```

pub mod core;
pub mod form;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Clock, SignatureRecord, SignatureStore, Step, StepHistory, StepTransition, TransitionCause,
};
pub use crate::form::{FormError, StepFormController};
pub use crate::validation::{FieldId, FieldSet, FieldValue, FieldViolation, UnknownField};
