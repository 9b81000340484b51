//! Invocation-gating combinators.
//!
//! Each gate wraps a single underlying callable and exposes a same-shaped
//! `call` plus, where execution can be deferred, a `cancel`. A gate owns
//! its private state (pending timer handle, counter, cached outcome)
//! exclusively -- nothing is shared between distinct gate instances.
//!
//! The call payload type `A` is an explicit value threaded through to the
//! forwarded invocation unchanged. Callers that need a receiver context
//! carry it inside the payload; there is no ambient binding.

mod count;
mod debounce;
mod once;
mod throttle;

pub use count::{after, before, After, Before};
pub use debounce::{debounce, Debounce};
pub use once::{once, Once};
pub use throttle::{throttle, Throttle};
