//! Virtual Clock Scheduler
//!
//! A [`Scheduler`] whose time only moves when [`ManualScheduler::advance`]
//! is called. Timers due within the advanced span run inline, in deadline
//! order, with the clock set to each timer's deadline while it runs.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::scheduler::{Scheduler, Task};

/// Deterministic scheduler for tests and offline replay.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    /// Keyed by (deadline, insertion order) so equal deadlines run FIFO.
    timers: RefCell<BTreeMap<(Duration, u64), Task>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of timers not yet fired
    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Deadline of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.borrow().keys().next().map(|&(due, _)| due)
    }

    /// Move the clock forward by `by`, running every timer that falls due.
    ///
    /// Timers scheduled by running tasks are honoured if they fall within
    /// the same span.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get().saturating_add(by);
        self.run_until(target);
    }

    /// Move the clock to `at` (no-op if `at` is in the past).
    pub fn advance_to(&self, at: Duration) {
        if at > self.now.get() {
            self.run_until(at);
        }
    }

    fn run_until(&self, target: Duration) {
        loop {
            // The borrow must end before the task runs: tasks may schedule.
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .first_key_value()
                    .is_some_and(|(&(due, _), _)| due <= target);
                if due { timers.pop_first() } else { None }
            };
            let Some(((due, seq), task)) = next else {
                break;
            };
            self.now.set(due);
            tracing::trace!(due_ms = due.as_millis() as u64, seq, "Firing virtual timer");
            task();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn delay(&self, after: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let due = self.now.get().saturating_add(after);
        self.timers.borrow_mut().insert((due, seq), task);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let clock = ManualScheduler::new();
        let (log, task) = recorder();

        clock.delay(Duration::from_millis(30), task("c"));
        clock.delay(Duration::from_millis(10), task("a"));
        clock.delay(Duration::from_millis(20), task("b"));
        assert_eq!(clock.pending(), 3);
        assert_eq!(clock.next_deadline(), Some(Duration::from_millis(10)));

        clock.advance(Duration::from_millis(25));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(clock.now(), Duration::from_millis(25));

        clock.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_equal_deadlines_run_in_insertion_order() {
        let clock = ManualScheduler::new();
        let (log, task) = recorder();

        clock.delay(Duration::from_millis(10), task("first"));
        clock.delay(Duration::from_millis(10), task("second"));
        clock.advance(Duration::from_millis(10));

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_task_can_schedule_within_same_advance() {
        let clock = Rc::new(ManualScheduler::new());
        let hits = Rc::new(Cell::new(0u32));

        let inner_clock = Rc::clone(&clock);
        let inner_hits = Rc::clone(&hits);
        clock.delay(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.set(inner_hits.get() + 1);
                let hits = Rc::clone(&inner_hits);
                inner_clock.delay(
                    Duration::from_millis(10),
                    Box::new(move || hits.set(hits.get() + 1)),
                );
            }),
        );

        clock.advance(Duration::from_millis(20));
        assert_eq!(hits.get(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_task_observes_its_own_deadline() {
        let clock = Rc::new(ManualScheduler::new());
        let seen = Rc::new(Cell::new(Duration::ZERO));

        let observer = Rc::clone(&clock);
        let slot = Rc::clone(&seen);
        clock.delay(
            Duration::from_millis(40),
            Box::new(move || slot.set(observer.now())),
        );
        clock.advance(Duration::from_millis(100));

        assert_eq!(seen.get(), Duration::from_millis(40));
        assert_eq!(clock.now(), Duration::from_millis(100));
    }

    #[test]
    fn test_far_deadlines_saturate() {
        let clock = ManualScheduler::new();
        let (log, task) = recorder();

        clock.advance(Duration::from_millis(1));
        clock.delay(Duration::MAX, task("never"));
        assert_eq!(clock.next_deadline(), Some(Duration::MAX));

        clock.advance(Duration::from_secs(3600));
        assert!(log.borrow().is_empty());
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::MAX);
        assert_eq!(clock.now(), Duration::MAX);
        assert_eq!(*log.borrow(), vec!["never"]);
    }

    #[test]
    fn test_advance_to_past_is_noop() {
        let clock = ManualScheduler::new();
        clock.advance(Duration::from_millis(50));
        clock.advance_to(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(50));
    }
}
