//! Trailing-edge delay gate.
//!
//! Execution is postponed until `delay_ms` has passed without a new call;
//! every call restarts the delay and replaces the captured payload, so at
//! most one execution is pending at any instant and only the last payload
//! ever fires.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::Clock;
use crate::scheduler::{Scheduler, TimerHandle};

/// Delay gate over one callable. Built with [`debounce`].
///
/// The pending handle and the callable live in separate cells: the firing
/// job clears the pending slot and releases it before invoking, so the
/// callable may freely call back into its own gate.
pub struct Debounce<A, C: Clock> {
    scheduler: Scheduler<C>,
    delay_ms: u64,
    func: Rc<RefCell<Box<dyn FnMut(A)>>>,
    pending: Rc<RefCell<Option<TimerHandle>>>,
}

/// Wrap `func` so it runs only after `delay_ms` of quiet.
pub fn debounce<A, C, F>(scheduler: &Scheduler<C>, delay_ms: u64, func: F) -> Debounce<A, C>
where
    A: 'static,
    C: Clock,
    F: FnMut(A) + 'static,
{
    Debounce {
        scheduler: scheduler.clone(),
        delay_ms,
        func: Rc::new(RefCell::new(Box::new(func))),
        pending: Rc::new(RefCell::new(None)),
    }
}

impl<A: 'static, C: Clock> Debounce<A, C> {
    /// Capture `args` and (re)start the delay.
    ///
    /// Any pending execution is cancelled and replaced -- a superseded
    /// execution never fires. Returns nothing synchronously; the
    /// underlying result is not observable here.
    pub fn call(&self, args: A) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
        let pending = Rc::clone(&self.pending);
        let func = Rc::clone(&self.func);
        let handle = self.scheduler.schedule(self.delay_ms, move || {
            pending.borrow_mut().take();
            (func.borrow_mut())(args);
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending execution without firing. No-op when idle;
    /// idempotent.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
    }

    /// Is an execution currently scheduled?
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
