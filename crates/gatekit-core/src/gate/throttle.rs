//! Fixed-window rate gate.
//!
//! The first call opens a window, captures its payload, and schedules
//! execution `interval_ms` later. Calls arriving while the window is open
//! are dropped entirely -- their payloads do not replace the captured one.
//! When the execution fires the window closes and the next call may open
//! a fresh one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::Clock;
use crate::scheduler::{Scheduler, TimerHandle};

/// Rate gate over one callable. Built with [`throttle`].
///
/// The window handle and the callable live in separate cells: the firing
/// job closes the window and releases it before invoking, so the callable
/// may freely call back into its own gate.
pub struct Throttle<A, C: Clock> {
    scheduler: Scheduler<C>,
    interval_ms: u64,
    func: Rc<RefCell<Box<dyn FnMut(A)>>>,
    window: Rc<RefCell<Option<TimerHandle>>>,
}

/// Wrap `func` so it runs at most once per `interval_ms`.
pub fn throttle<A, C, F>(scheduler: &Scheduler<C>, interval_ms: u64, func: F) -> Throttle<A, C>
where
    A: 'static,
    C: Clock,
    F: FnMut(A) + 'static,
{
    Throttle {
        scheduler: scheduler.clone(),
        interval_ms,
        func: Rc::new(RefCell::new(Box::new(func))),
        window: Rc::new(RefCell::new(None)),
    }
}

impl<A: 'static, C: Clock> Throttle<A, C> {
    /// Open a window with `args`, or drop the call if one is already open.
    ///
    /// Returns nothing synchronously; the underlying result is not
    /// observable here.
    pub fn call(&self, args: A) {
        if self.window.borrow().is_some() {
            return;
        }
        let window = Rc::clone(&self.window);
        let func = Rc::clone(&self.func);
        let handle = self.scheduler.schedule(self.interval_ms, move || {
            window.borrow_mut().take();
            (func.borrow_mut())(args);
        });
        *self.window.borrow_mut() = Some(handle);
    }

    /// Close the open window and cancel its execution without firing.
    /// No-op when no window is open; idempotent.
    pub fn cancel(&self) {
        if let Some(handle) = self.window.borrow_mut().take() {
            handle.cancel();
        }
    }

    /// Is a window currently open?
    pub fn is_open(&self) -> bool {
        self.window.borrow().is_some()
    }
}
