//! Stage change history tracking.
//!
//! Provides immutable tracking of form stage changes over time,
//! following functional programming principles.

use super::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a stage change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransitionCause {
    /// The current stage validated and the form moved forward
    Advance,
    /// The signer went back one stage
    Retreat,
    /// A successful submission returned the form to the first stage
    Reset,
}

/// Record of a single stage change.
///
/// Transitions are immutable values representing a move from one stage
/// to another at a specific point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepTransition {
    /// The stage being left
    pub from: Step,
    /// The stage being entered
    pub to: Step,
    /// When the change occurred
    pub at: DateTime<Utc>,
    /// Why the change occurred
    pub cause: TransitionCause,
}

/// Ordered history of stage changes.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use signwall::{Step, StepHistory, StepTransition, TransitionCause};
/// use chrono::Utc;
///
/// let history = StepHistory::new();
/// let history = history.record(StepTransition {
///     from: Step::Identity,
///     to: Step::Contact,
///     at: Utc::now(),
///     cause: TransitionCause::Advance,
/// });
///
/// assert_eq!(history.path(), vec![Step::Identity, Step::Contact]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StepHistory {
    transitions: Vec<StepTransition>,
}

impl StepHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StepTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the sequence of stages traversed.
    ///
    /// Returns the initial stage, then the `to` stage of each change.
    /// Empty when nothing has been recorded yet.
    pub fn path(&self) -> Vec<Step> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Time from the first recorded change to the last.
    ///
    /// Returns `None` if there are no transitions. This is the
    /// "time spent in the form" figure submission analytics report.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.at.signed_duration_since(first.at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[StepTransition] {
        &self.transitions
    }
}
