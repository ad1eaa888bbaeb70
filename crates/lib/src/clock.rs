//! Time provider abstraction
//!
//! Expiration checks never read the system time directly. They go through a
//! [`Clock`], so production code uses [`SystemClock`] while tests pin time with
//! [`FixedClock`] and probe the exact boundary of an assertion's lifetime.
//!
//! # Example
//!
//! ```
//! use persona::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let millis = clock.now_millis();
//! assert!(millis > 0);
//! ```

use std::fmt::Debug;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "testing"))]
use std::sync::atomic::{AtomicU64, Ordering};

/// A time provider for getting current timestamps.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time as milliseconds since Unix epoch.
    fn now_millis(&self) -> u64;

    /// Returns the current time as an RFC3339-formatted string.
    fn now_rfc3339(&self) -> String {
        self.now().to_rfc3339()
    }

    /// Returns the current time as a UTC timestamp.
    ///
    /// Values beyond chrono's range collapse to the Unix epoch.
    fn now(&self) -> DateTime<Utc> {
        i64::try_from(self.now_millis())
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_default()
    }
}

/// Production clock using real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn now_rfc3339(&self) -> String {
        Utc::now().to_rfc3339()
    }
}

/// Test clock that only moves when told to.
///
/// Reads never advance it, so `exp = now - 1` and `exp = now + 1` can be
/// checked against the same instant.
///
/// # Example
///
/// ```
/// use persona::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_000);
/// assert_eq!(clock.now_millis(), 1_000);
/// assert_eq!(clock.now_millis(), 1_000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_millis(), 1_500);
/// ```
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicU64,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Create a new fixed clock at the given time in milliseconds.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// Set the clock to a specific time in milliseconds.
    pub fn set(&self, ms: u64) {
        self.millis.store(ms, Ordering::SeqCst);
    }

    /// Get the current time.
    pub fn get(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.get()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(1704067200000)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clone for FixedClock {
    fn clone(&self) -> Self {
        // Independent clock starting at the current value
        Self::new(self.get())
    }
}
