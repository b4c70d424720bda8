//! Form stages for the petition signature flow.
//!
//! The signature form is a fixed, linear sequence of three stages. Stages
//! are immutable values; moving between them is the controller's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three ordered stages of the signature form.
///
/// The sequence is linear with no branching and no skipping: `Identity`
/// leads to `Contact` leads to `Consent`. All methods are pure.
///
/// # Example
///
/// ```rust
/// use signwall::Step;
///
/// let step = Step::first();
/// assert_eq!(step, Step::Identity);
/// assert_eq!(step.next(), Some(Step::Contact));
/// assert_eq!(step.prev(), None);
/// assert!(!step.is_final());
/// assert!(Step::Consent.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Step {
    /// Who is signing: full name and country
    Identity,
    /// How to reach them: gamertag and email, both optional
    Contact,
    /// Final words: free-text comment and the required consent checkbox
    Consent,
}

impl Step {
    /// Total number of stages in the form.
    pub const COUNT: usize = 3;

    /// The stage the form starts in (and returns to after submission).
    pub fn first() -> Self {
        Step::Identity
    }

    /// Get the stage's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Identity => "Identity",
            Self::Contact => "Contact",
            Self::Consent => "Consent",
        }
    }

    /// One-based position of this stage, as shown in progress indicators.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signwall::Step;
    ///
    /// assert_eq!(Step::Identity.index(), 1);
    /// assert_eq!(Step::Consent.index(), Step::COUNT);
    /// ```
    pub fn index(&self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Contact => 2,
            Self::Consent => 3,
        }
    }

    /// Check if this is the final stage, from which submission happens.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Consent)
    }

    /// The following stage, or `None` from the final stage.
    pub fn next(&self) -> Option<Step> {
        match self {
            Self::Identity => Some(Self::Contact),
            Self::Contact => Some(Self::Consent),
            Self::Consent => None,
        }
    }

    /// The preceding stage, or `None` from the first stage.
    pub fn prev(&self) -> Option<Step> {
        match self {
            Self::Identity => None,
            Self::Contact => Some(Self::Identity),
            Self::Consent => Some(Self::Contact),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
