//! Wall-clock source for timestamping.
//!
//! The core never reads ambient time directly; whoever constructs the
//! controller decides where timestamps come from. Tests inject a fixed
//! source for deterministic records.

use chrono::{DateTime, Utc};
use std::fmt;

/// Injectable source of the current wall-clock time.
///
/// Wraps a pure, thread-safe closure. The default source is the system
/// clock.
///
/// # Example
///
/// ```rust
/// use signwall::Clock;
/// use chrono::{TimeZone, Utc};
///
/// let frozen = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// let clock = Clock::fixed(frozen);
///
/// assert_eq!(clock.now(), frozen);
/// assert_eq!(clock.now(), clock.now());
/// ```
pub struct Clock {
    source: Box<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl Clock {
    /// Create a clock from an arbitrary time source.
    pub fn new<F>(source: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Clock {
            source: Box::new(source),
        }
    }

    /// The system clock.
    pub fn system() -> Self {
        Self::new(Utc::now)
    }

    /// A clock frozen at the given instant.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::new(move || at)
    }

    /// Read the current time from the source.
    pub fn now(&self) -> DateTime<Utc> {
        (self.source)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Clock(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let clock = Clock::fixed(at);

        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = Clock::system();
        let before = clock.now();
        let after = clock.now();
        assert!(after >= before);
    }

    #[test]
    fn custom_source_is_used() {
        let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let clock = Clock::new(move || at + chrono::Duration::hours(1));
        assert_eq!(clock.now(), at + chrono::Duration::hours(1));
    }
}
