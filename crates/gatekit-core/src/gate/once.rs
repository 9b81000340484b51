//! Single-execution memoizer.

use std::mem;

enum OnceState<A, R> {
    Ready(Box<dyn FnOnce(A) -> R>),
    Done(Option<R>),
}

/// Runs the wrapped callable exactly once, ever. Built with [`once`].
///
/// The first call consumes the callable (dropping it afterwards, so
/// whatever it owned is released), caches the outcome, and returns it.
/// Every later call returns a clone of the cached outcome, regardless of
/// its payload.
///
/// The one-execution token is taken before the callable runs: if the
/// first call panics, the panic propagates to that caller, the token is
/// permanently spent, and every later call returns `None`. There is no
/// retry.
pub struct Once<A, R> {
    state: OnceState<A, R>,
}

/// Wrap `func` so it executes at most once.
pub fn once<A, R, F>(func: F) -> Once<A, R>
where
    F: FnOnce(A) -> R + 'static,
{
    Once {
        state: OnceState::Ready(Box::new(func)),
    }
}

impl<A, R: Clone> Once<A, R> {
    /// Invoke on the first call; return the cached outcome afterwards.
    pub fn call(&mut self, args: A) -> Option<R> {
        match mem::replace(&mut self.state, OnceState::Done(None)) {
            OnceState::Ready(func) => {
                let result = func(args);
                self.state = OnceState::Done(Some(result.clone()));
                Some(result)
            }
            OnceState::Done(cached) => {
                let result = cached.clone();
                self.state = OnceState::Done(cached);
                result
            }
        }
    }
}

impl<A, R> Once<A, R> {
    /// Has the single execution been consumed?
    pub fn has_run(&self) -> bool {
        matches!(self.state, OnceState::Done(_))
    }
}
