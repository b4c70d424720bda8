//! Step form controller: the stepper that gates signature submission.

use crate::core::{
    Clock, SignatureRecord, Step, StepHistory, StepTransition, TransitionCause,
};
use crate::validation::{
    check_field, validate_all, validate_step, FieldId, FieldSet, FieldValidation, FieldValue,
    FieldViolation,
};
use stillwater::validation::Validation;
use thiserror::Error;

/// Why a controller operation was refused.
///
/// Every variant is recoverable by further user input; nothing here
/// aborts anything.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// One or more fields failed validation; all offenders are listed
    #[error("{} field(s) failed validation", .violations.len())]
    Invalid { violations: Vec<FieldViolation> },

    /// `advance` was called from the final stage
    #[error("No step follows '{step}'")]
    NoNextStep { step: Step },

    /// `submit` was called before reaching the final stage
    #[error("Cannot submit from '{step}'; the form has further steps")]
    NotAtFinalStep { step: Step },
}

/// Finite-state stepper over the signature form.
///
/// Holds the current [`Step`], the draft field values, and the history of
/// stage changes. Values may be set at any time; validation runs at the
/// gates (`advance`, `submit`) and on the eager per-field check. On a
/// successful submission the controller hands back the assembled
/// [`SignatureRecord`] and resets itself to the first stage with a
/// cleared draft.
///
/// The controller holds no rendering logic and performs no I/O; the
/// injected [`Clock`] is its only view of the outside world.
///
/// # Example
///
/// ```rust
/// use signwall::{FieldId, FormError, Step, StepFormController};
///
/// let mut form = StepFormController::new();
///
/// // Step 1 refuses to advance until its required fields pass
/// assert!(matches!(form.advance(), Err(FormError::Invalid { .. })));
///
/// form.set_field(FieldId::FullName, "Ada Lovelace");
/// form.set_field(FieldId::Country, "United Kingdom");
/// assert_eq!(form.advance(), Ok(Step::Contact));
/// ```
#[derive(Debug)]
pub struct StepFormController {
    current: Step,
    draft: FieldSet,
    history: StepHistory,
    clock: Clock,
}

impl StepFormController {
    /// Create a controller at the first stage, stamping submissions with
    /// the system clock.
    pub fn new() -> Self {
        Self::with_clock(Clock::system())
    }

    /// Create a controller with an injected time source.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            current: Step::first(),
            draft: FieldSet::new(),
            history: StepHistory::new(),
            clock,
        }
    }

    /// The stage the form is currently on (pure).
    pub fn current_step(&self) -> Step {
        self.current
    }

    /// The draft values entered so far (pure).
    pub fn fields(&self) -> &FieldSet {
        &self.draft
    }

    /// The history of stage changes (pure).
    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    /// Store a draft value for a field.
    ///
    /// Any field may be set at any time regardless of the current stage;
    /// the gates decide later whether the draft passes.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.draft.set(field, value.into());
    }

    /// Eagerly check a single field against the current draft.
    ///
    /// This is the blur-time contract: it classifies the one field
    /// without mutating anything, so the presentation layer can show or
    /// clear the field's message immediately.
    pub fn validate_field(&self, field: FieldId) -> FieldValidation {
        check_field(&self.draft, field)
    }

    /// Validate the current stage and move forward on success.
    ///
    /// Fails with [`FormError::NoNextStep`] from the final stage
    /// regardless of validity, or with [`FormError::Invalid`] listing
    /// every offending field of the stage. The state does not change on
    /// failure.
    pub fn advance(&mut self) -> Result<Step, FormError> {
        let Some(next) = self.current.next() else {
            return Err(FormError::NoNextStep { step: self.current });
        };

        match validate_step(self.current, &self.draft) {
            Validation::Success(_) => {
                self.transition(next, TransitionCause::Advance);
                Ok(self.current)
            }
            Validation::Failure(errors) => {
                let violations: Vec<FieldViolation> = errors.iter().cloned().collect();
                tracing::debug!(
                    step = %self.current,
                    violations = violations.len(),
                    "step validation failed"
                );
                Err(FormError::Invalid { violations })
            }
        }
    }

    /// Move back one stage unconditionally; no-op at the first stage.
    ///
    /// Returns the (possibly unchanged) current stage. Draft values are
    /// kept, so nothing is lost by going back.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.current.prev() {
            self.transition(prev, TransitionCause::Retreat);
        }
        self.current
    }

    /// Submit the form from the final stage.
    ///
    /// Validates every field of every stage, accumulating all
    /// violations, so the assembled record's invariants hold even if an
    /// earlier field was edited after its stage passed. On success,
    /// returns the record stamped by the clock and resets the controller
    /// to the first stage with a cleared draft.
    pub fn submit(&mut self) -> Result<SignatureRecord, FormError> {
        if !self.current.is_final() {
            return Err(FormError::NotAtFinalStep { step: self.current });
        }

        if let Validation::Failure(errors) = validate_all(&self.draft) {
            let violations: Vec<FieldViolation> = errors.iter().cloned().collect();
            tracing::debug!(violations = violations.len(), "submission refused");
            return Err(FormError::Invalid { violations });
        }

        let text = |field: FieldId| self.draft.trimmed(field).unwrap_or_default().to_string();
        let optional = |field: FieldId| self.draft.trimmed(field).map(str::to_string);

        let record = SignatureRecord {
            name: text(FieldId::FullName),
            country: text(FieldId::Country),
            gamertag: optional(FieldId::Gamertag),
            email: optional(FieldId::Email),
            comment: optional(FieldId::Comment),
            submitted_at: self.clock.now(),
        };

        tracing::info!(
            country = %record.country,
            has_comment = record.comment.is_some(),
            has_gamertag = record.gamertag.is_some(),
            "signature submitted"
        );

        self.transition(Step::first(), TransitionCause::Reset);
        self.draft.clear();

        Ok(record)
    }

    fn transition(&mut self, to: Step, cause: TransitionCause) {
        let change = StepTransition {
            from: self.current,
            to,
            at: self.clock.now(),
            cause,
        };
        tracing::debug!(from = %change.from, to = %change.to, "form step changed");
        self.history = self.history.record(change);
        self.current = to;
    }
}

impl Default for StepFormController {
    fn default() -> Self {
        Self::new()
    }
}
