//! Signature records: one immutable entry per petition signer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One petition signer.
///
/// Records are assembled by the form controller only after every step has
/// validated, and are never edited afterwards: the store hands out shared
/// references only. Text fields are stored trimmed; optional fields that
/// were left blank are `None`.
///
/// # Example
///
/// ```rust
/// use signwall::SignatureRecord;
/// use chrono::Utc;
///
/// let record = SignatureRecord {
///     name: "Ada Lovelace".to_string(),
///     country: "United Kingdom".to_string(),
///     gamertag: None,
///     email: Some("ada@example.org".to_string()),
///     comment: None,
///     submitted_at: Utc::now(),
/// };
/// assert!(record.email.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignatureRecord {
    /// The signer's full name, at least two characters after trimming
    pub name: String,
    /// The signer's country, non-empty
    pub country: String,
    /// Optional in-game handle
    pub gamertag: Option<String>,
    /// Optional contact email, syntactically valid when present
    pub email: Option<String>,
    /// Optional free-text comment
    pub comment: Option<String>,
    /// When the signature was submitted, assigned at creation time
    pub submitted_at: DateTime<Utc>,
}
