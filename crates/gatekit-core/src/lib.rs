//! # Gatekit Core Library
//!
//! Invocation-gating combinators: wrappers that match the call shape of an
//! underlying callable but control whether -- and when -- it actually
//! executes. Everything is in-process and single-threaded; there is no
//! network, persistence, or async runtime.
//!
//! ## Architecture
//!
//! - **Gates**: [`debounce`], [`throttle`], [`once`], and the call-count
//!   gates [`after`]/[`before`]. Each wraps exactly one callable and owns
//!   its private state (pending timer handle, counter, cached outcome);
//!   no state is ever shared between distinct gate instances.
//! - **Scheduler**: deferred single-shot execution over an injected
//!   [`Clock`]. No internal threads -- the caller pumps
//!   [`Scheduler::tick`] periodically, and tests drive a [`ManualClock`]
//!   for fully deterministic timing.
//! - **Selection helpers**: pure [`pick`]/[`omit`]/[`find_key`] over
//!   insertion-ordered maps.
//!
//! ## Key Components
//!
//! - [`Debounce`]: delays execution until a quiet period elapses; each
//!   call resets the delay and replaces the captured payload.
//! - [`Throttle`]: executes at most once per fixed window; calls inside an
//!   open window are dropped.
//! - [`Once`]: executes the underlying callable exactly once and caches
//!   the outcome.
//! - [`After`] / [`Before`]: forward or suppress based on a running call
//!   counter compared against a threshold.

pub mod clock;
pub mod error;
pub mod gate;
pub mod scheduler;
pub mod select;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, Result};
pub use gate::{after, before, debounce, once, throttle, After, Before, Debounce, Once, Throttle};
pub use scheduler::{Scheduler, TimerHandle};
pub use select::{find_key, omit, pick};
