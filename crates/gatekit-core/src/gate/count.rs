//! Call-count threshold gates.
//!
//! Both gates keep a counter starting at 0, incremented on every call
//! before the forwarding decision. The counter never resets (it saturates
//! rather than wraps), and decisions depend on the counter alone, never on
//! time.

use crate::error::{ConfigError, Result};

/// Forwards from the `n`th call onward. Built with [`after`].
pub struct After<A, R> {
    threshold: u64,
    count: u64,
    func: Box<dyn FnMut(A) -> R>,
}

/// Forwards on the first `n - 1` calls only. Built with [`before`].
pub struct Before<A, R> {
    threshold: u64,
    count: u64,
    func: Box<dyn FnMut(A) -> R>,
}

/// Wrap `func` so it starts forwarding once the call counter reaches `n`.
///
/// With `n = 0` the very first call already forwards. A negative `n` is a
/// configuration error, raised here and never at call time.
pub fn after<A, R, F>(n: i64, func: F) -> Result<After<A, R>>
where
    F: FnMut(A) -> R + 'static,
{
    Ok(After {
        threshold: validate_threshold(n)?,
        count: 0,
        func: Box::new(func),
    })
}

/// Wrap `func` so it stops forwarding once the call counter reaches `n`.
///
/// From the call that reaches `n` onward the result is permanently absent,
/// though the wrapped callable is retained. A negative `n` is a
/// configuration error, raised here and never at call time.
pub fn before<A, R, F>(n: i64, func: F) -> Result<Before<A, R>>
where
    F: FnMut(A) -> R + 'static,
{
    Ok(Before {
        threshold: validate_threshold(n)?,
        count: 0,
        func: Box::new(func),
    })
}

fn validate_threshold(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| ConfigError::NegativeThreshold { n })
}

impl<A, R> After<A, R> {
    /// Forward once the counter has reached the threshold; `None` before.
    pub fn call(&mut self, args: A) -> Option<R> {
        self.count = self.count.saturating_add(1);
        if self.count >= self.threshold {
            Some((self.func)(args))
        } else {
            None
        }
    }

    /// Calls seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<A, R> Before<A, R> {
    /// Forward while the counter is strictly below the threshold; `None`
    /// from the call that reaches it onward.
    pub fn call(&mut self, args: A) -> Option<R> {
        self.count = self.count.saturating_add(1);
        if self.count < self.threshold {
            Some((self.func)(args))
        } else {
            None
        }
    }

    /// Calls seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
