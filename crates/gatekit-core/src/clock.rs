//! Millisecond clock sources.
//!
//! All timing in this crate is expressed as `u64` milliseconds. The
//! scheduler reads time through the [`Clock`] trait, so the timed gates
//! run against real wall-clock time in production ([`SystemClock`]) and
//! against a hand-advanced clock in tests ([`ManualClock`]).

use std::cell::Cell;
use std::rc::Rc;

/// A source of the current time in milliseconds.
pub trait Clock {
    /// Current reading in milliseconds.
    ///
    /// The scheduler treats a deadline as due once the reading passes it;
    /// a reading that goes backwards simply delays whatever is pending.
    fn now_ms(&self) -> u64;
}

/// Wall-clock time as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// A clock that only moves when told to.
///
/// Clones share the underlying reading, so a test can keep one handle to
/// drive time while the scheduler owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Advance the reading by `delta_ms`.
    pub fn advance_ms(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }

    /// Jump the reading to an absolute value, forwards or backwards.
    pub fn set_ms(&self, ms: u64) {
        self.now_ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
