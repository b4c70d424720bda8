//! The multi-step form controller.
//!
//! Gates progression through the signature form's three stages and
//! assembles a signature record once every stage has validated.

mod controller;

pub use controller::{FormError, StepFormController};
