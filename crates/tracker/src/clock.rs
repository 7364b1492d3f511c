//! Clock abstraction.
//!
//! The manual-override suppression window is a valid-until timestamp
//! compared at read time, so the tracker only needs a source of "now".
//! Injecting it keeps the window testable without real waiting.

use navspy_core::Time;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> Time;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        chrono::Utc::now()
    }
}
