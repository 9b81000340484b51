//! Deferred single-shot job execution.
//!
//! The scheduler does not use internal threads -- the caller is
//! responsible for calling [`Scheduler::tick`] periodically. A job becomes
//! due once the injected [`Clock`] passes its deadline and fires on the
//! next tick, in (deadline, registration) order.
//!
//! ## Usage
//!
//! ```ignore
//! let scheduler = Scheduler::new(SystemClock);
//! let handle = scheduler.schedule(300, || println!("later"));
//! // In a loop:
//! scheduler.tick(); // Fires whatever has become due.
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::Clock;

type Job = Box<dyn FnOnce()>;

/// Handle to one scheduled job.
///
/// Cancellation is synchronous and idempotent: once `cancel` returns, the
/// job is guaranteed never to run.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct Entry {
    id: u64,
    due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    job: Job,
}

struct Inner<C> {
    clock: C,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Single-threaded deferred-execution capability.
///
/// Clones are cheap and address the same queue, so gates can each hold
/// their own copy of the scheduler they were built against.
pub struct Scheduler<C: Clock> {
    inner: Rc<RefCell<Inner<C>>>,
}

impl<C: Clock> Clone for Scheduler<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                clock,
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Current clock reading.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().clock.now_ms()
    }

    /// Number of live (not yet fired, not cancelled) jobs.
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Register a single-shot job due `delay_ms` from now.
    pub fn schedule(&self, delay_ms: u64, job: impl FnOnce() + 'static) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let due_ms = inner.clock.now_ms().saturating_add(delay_ms);
        let cancelled = Rc::new(Cell::new(false));
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            due_ms,
            cancelled: Rc::clone(&cancelled),
            job: Box::new(job),
        });
        TimerHandle { cancelled }
    }

    /// Fire every due job and drop every cancelled one. Returns the number
    /// of jobs that ran.
    ///
    /// Due jobs run in (deadline, registration) order, after the queue
    /// borrow is released, so a running job may schedule new work; anything
    /// it schedules waits for a later tick. A panic inside a job propagates
    /// to the caller of `tick` -- there is no call site left to observe it.
    pub fn tick(&self) -> usize {
        let mut due = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.clock.now_ms();
            let mut keep = Vec::new();
            let mut due = Vec::new();
            for entry in std::mem::take(&mut inner.entries) {
                if entry.cancelled.get() {
                    continue;
                }
                if entry.due_ms <= now {
                    due.push(entry);
                } else {
                    keep.push(entry);
                }
            }
            inner.entries = keep;
            due
        };
        due.sort_by_key(|e| (e.due_ms, e.id));

        let mut fired = 0;
        for entry in due {
            // An earlier job in this batch may have cancelled a later one.
            if entry.cancelled.get() {
                continue;
            }
            fired += 1;
            (entry.job)();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Scheduler<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let scheduler = Scheduler::new(clock.clone());
        (Rc::new(RefCell::new(Vec::new())), scheduler, clock)
    }

    fn push(seen: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> impl FnOnce() {
        let seen = Rc::clone(seen);
        move || seen.borrow_mut().push(label)
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let (seen, scheduler, clock) = recorder();
        scheduler.schedule(100, push(&seen, "a"));

        clock.advance_ms(99);
        assert_eq!(scheduler.tick(), 0);
        assert!(seen.borrow().is_empty());

        clock.advance_ms(1);
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(*seen.borrow(), vec!["a"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn due_jobs_fire_in_deadline_then_registration_order() {
        let (seen, scheduler, clock) = recorder();
        scheduler.schedule(200, push(&seen, "late"));
        scheduler.schedule(100, push(&seen, "early"));
        scheduler.schedule(100, push(&seen, "early-second"));

        clock.advance_ms(500);
        assert_eq!(scheduler.tick(), 3);
        assert_eq!(*seen.borrow(), vec!["early", "early-second", "late"]);
    }

    #[test]
    fn cancelled_job_never_fires() {
        let (seen, scheduler, clock) = recorder();
        let handle = scheduler.schedule(50, push(&seen, "a"));
        handle.cancel();
        handle.cancel(); // Idempotent.
        assert!(handle.is_cancelled());

        clock.advance_ms(100);
        assert_eq!(scheduler.tick(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn cancellation_within_a_batch_is_honoured() {
        let (seen, scheduler, clock) = recorder();
        let victim = scheduler.schedule(10, push(&seen, "victim"));
        // Due earlier, so it runs first and cancels the other.
        let seen2 = Rc::clone(&seen);
        scheduler.schedule(5, move || {
            seen2.borrow_mut().push("killer");
            victim.cancel();
        });

        clock.advance_ms(10);
        scheduler.tick();
        assert_eq!(*seen.borrow(), vec!["killer"]);
    }

    #[test]
    fn jobs_scheduled_while_firing_wait_for_a_later_tick() {
        let (seen, scheduler, clock) = recorder();
        let inner = scheduler.clone();
        let seen2 = Rc::clone(&seen);
        scheduler.schedule(0, move || {
            seen2.borrow_mut().push("outer");
            let seen3 = Rc::clone(&seen2);
            inner.schedule(0, move || seen3.borrow_mut().push("inner"));
        });

        assert_eq!(scheduler.tick(), 1);
        assert_eq!(*seen.borrow(), vec!["outer"]);
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(*seen.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn pending_excludes_cancelled_jobs() {
        let (_, scheduler, _) = recorder();
        let keep = scheduler.schedule(100, || {});
        let discard = scheduler.schedule(100, || {});
        assert_eq!(scheduler.pending(), 2);
        discard.cancel();
        assert_eq!(scheduler.pending(), 1);
        keep.cancel();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    #[should_panic(expected = "wrapped callable failed")]
    fn panic_in_a_job_propagates_to_the_tick_caller() {
        let clock = ManualClock::new(0);
        let scheduler = Scheduler::new(clock.clone());
        scheduler.schedule(0, || panic!("wrapped callable failed"));
        scheduler.tick();
    }
}
