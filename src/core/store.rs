//! The signature wall: an ordered, newest-first store of signatures.

use super::record::SignatureRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Ordered collection of signatures for the page session, newest first.
///
/// The store is an owned handle with controlled mutation: callers append
/// through [`add`](SignatureStore::add) and read through
/// [`recent`](SignatureStore::recent) and [`count`](SignatureStore::count).
/// It performs no validation and no deduplication; the form controller is
/// the gatekeeper and the store trusts its input. Nothing here survives
/// the session.
///
/// # Example
///
/// ```rust
/// use signwall::{SignatureRecord, SignatureStore};
/// use chrono::Utc;
///
/// let mut store = SignatureStore::new();
/// let record = SignatureRecord {
///     name: "Ada Lovelace".to_string(),
///     country: "United Kingdom".to_string(),
///     gamertag: None,
///     email: None,
///     comment: None,
///     submitted_at: Utc::now(),
/// };
///
/// assert_eq!(store.add(record), 1);
/// assert_eq!(store.count(), 1);
/// assert_eq!(store.recent(10).len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignatureStore {
    records: Vec<SignatureRecord>,
}

impl SignatureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a store seeded with the demonstration signatures shown on
    /// first load, newest first.
    pub fn demo() -> Self {
        let now = Utc::now();
        let mut store = Self::new();
        store.seed(vec![
            SignatureRecord {
                name: "Carlos Rodriguez".to_string(),
                country: "Colombia".to_string(),
                gamertag: None,
                email: None,
                comment: Some(
                    "Llevamos años sufriendo con este servidor lleno de lag y hackers".to_string(),
                ),
                submitted_at: now,
            },
            SignatureRecord {
                name: "Maria González".to_string(),
                country: "México".to_string(),
                gamertag: None,
                email: None,
                comment: Some("Es hora de que cierren este servidor problemático".to_string()),
                submitted_at: now - chrono::Duration::days(1),
            },
            SignatureRecord {
                name: "Alex Fernández".to_string(),
                country: "España".to_string(),
                gamertag: None,
                email: None,
                comment: Some("The Hive es muchísimo mejor que Lifeboat".to_string()),
                submitted_at: now - chrono::Duration::days(2),
            },
        ]);
        store
    }

    /// Replace the store's contents wholesale.
    ///
    /// Intended for startup-time seeding; the given sequence is taken as
    /// already ordered newest first.
    pub fn seed(&mut self, records: Vec<SignatureRecord>) {
        self.records = records;
    }

    /// Insert a signature at the front of the wall.
    ///
    /// Returns the new count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signwall::{SignatureRecord, SignatureStore};
    /// use chrono::Utc;
    ///
    /// let mut store = SignatureStore::new();
    /// let record = |name: &str| SignatureRecord {
    ///     name: name.to_string(),
    ///     country: "España".to_string(),
    ///     gamertag: None,
    ///     email: None,
    ///     comment: None,
    ///     submitted_at: Utc::now(),
    /// };
    ///
    /// store.add(record("First"));
    /// store.add(record("Second"));
    ///
    /// // Newest first
    /// assert_eq!(store.recent(2)[0].name, "Second");
    /// assert_eq!(store.recent(2)[1].name, "First");
    /// ```
    pub fn add(&mut self, record: SignatureRecord) -> usize {
        self.records.insert(0, record);
        let count = self.records.len();
        tracing::debug!(count, "signature recorded");
        count
    }

    /// The `n` most recent signatures (or fewer if the store holds
    /// fewer), preserving front-to-back order. Pure read, no mutation.
    pub fn recent(&self, n: usize) -> &[SignatureRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Current number of signatures.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Check if the wall is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all signatures, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SignatureRecord> {
        self.records.iter()
    }

    /// Progress toward a signature goal, clamped to `0.0..=1.0`.
    ///
    /// A goal of zero counts as already reached. Counters and progress
    /// bars derive their display from this single figure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signwall::SignatureStore;
    ///
    /// let store = SignatureStore::demo();
    /// assert_eq!(store.fraction_of_goal(100), 0.03);
    /// assert_eq!(store.fraction_of_goal(2), 1.0);
    /// assert_eq!(store.fraction_of_goal(0), 1.0);
    /// ```
    pub fn fraction_of_goal(&self, goal: usize) -> f64 {
        if goal == 0 {
            return 1.0;
        }
        (self.records.len() as f64 / goal as f64).min(1.0)
    }
}
