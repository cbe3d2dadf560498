//! Deferred Task Scheduling
//!
//! The `delay(duration, task)` capability handed to anything that needs a
//! timer, so callers never assume an ambient clock.

use std::rc::Rc;
use std::time::Duration;

/// A deferred unit of work. Single-threaded, so it need not be `Send`.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Runs a task once `after` has elapsed.
///
/// Implementations run tasks on the same logical thread that scheduled
/// them, in deadline order. There is no cancellation.
pub trait Scheduler {
    fn delay(&self, after: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn delay(&self, after: Duration, task: Task) {
        (**self).delay(after, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn delay(&self, after: Duration, task: Task) {
        (**self).delay(after, task)
    }
}

/// Scheduler backed by tokio timers.
///
/// Tasks are spawned with [`tokio::task::spawn_local`], so `delay` must be
/// called from within a [`tokio::task::LocalSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn delay(&self, after: Duration, task: Task) {
        tracing::trace!(after_ms = after.as_millis() as u64, "Scheduling deferred task");
        tokio::task::spawn_local(async move {
            tokio::time::sleep(after).await;
            task();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::task::LocalSet;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_runs_task_after_delay() {
        LocalSet::new()
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                TokioScheduler.delay(Duration::from_millis(100), Box::new(move || flag.set(true)));

                tokio::time::sleep(Duration::from_millis(99)).await;
                assert!(!fired.get());

                tokio::time::sleep(Duration::from_millis(2)).await;
                assert!(fired.get());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_through_rc() {
        LocalSet::new()
            .run_until(async {
                let scheduler = Rc::new(TokioScheduler);
                let count = Rc::new(Cell::new(0u32));
                for delay_ms in [30u64, 10, 20] {
                    let count = Rc::clone(&count);
                    scheduler.delay(
                        Duration::from_millis(delay_ms),
                        Box::new(move || count.set(count.get() + 1)),
                    );
                }

                tokio::time::sleep(Duration::from_millis(15)).await;
                assert_eq!(count.get(), 1);

                tokio::time::sleep(Duration::from_millis(20)).await;
                assert_eq!(count.get(), 3);
            })
            .await;
    }
}
