//! Leading-edge Throttle
//!
//! Wraps a handler so that it runs at most once per cooldown window. The
//! first call of a window is forwarded immediately; every call that arrives
//! while the window is open is dropped (not queued, not replayed).
//!
//! ```text
//! idle ──call──▶ cooling-down   (forwarded)
//! cooling-down ──call──▶ cooling-down   (dropped)
//! cooling-down ──timer──▶ idle
//! ```
//!
//! The cooldown flag is an `Rc<Cell<bool>>` shared only with the reset
//! timer, so a throttle is `!Send` and belongs to one cooperative thread.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::config::ThrottleConfig;
use crate::scheduler::Scheduler;

/// Throttle construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThrottleError {
    #[error("Throttle window must be positive, got {0} ms")]
    NonPositiveWindow(i64),
}

/// A callable accepting one argument value.
///
/// Handlers of several arguments take a tuple. Every `Fn(A)` closure is a
/// handler, and so is a [`Throttle`], which allows wrapping a throttle again.
pub trait Handler<A> {
    fn handle(&self, args: A);
}

impl<A, F> Handler<A> for F
where
    F: Fn(A),
{
    fn handle(&self, args: A) {
        self(args)
    }
}

/// What a throttle did with a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Forwarded to the inner handler; a new window started.
    Forwarded,
    /// Discarded because a window was open.
    Dropped,
}

impl Admission {
    pub fn is_forwarded(&self) -> bool {
        matches!(self, Admission::Forwarded)
    }
}

/// Leading-edge throttle around handler `H`, timed by scheduler `S`.
pub struct Throttle<H, S> {
    handler: H,
    scheduler: S,
    window: Duration,
    cooling: Rc<Cell<bool>>,
}

/// Wrap `handler` so it runs at most once per `window`.
///
/// Fails fast on a zero window.
pub fn throttle<H, S>(
    handler: H,
    window: Duration,
    scheduler: S,
) -> Result<Throttle<H, S>, ThrottleError>
where
    S: Scheduler,
{
    Throttle::new(handler, window, scheduler)
}

impl<H, S> Throttle<H, S>
where
    S: Scheduler,
{
    pub fn new(handler: H, window: Duration, scheduler: S) -> Result<Self, ThrottleError> {
        if window.is_zero() {
            return Err(ThrottleError::NonPositiveWindow(0));
        }
        Ok(Self {
            handler,
            scheduler,
            window,
            cooling: Rc::new(Cell::new(false)),
        })
    }

    pub fn from_config(
        handler: H,
        config: &ThrottleConfig,
        scheduler: S,
    ) -> Result<Self, ThrottleError> {
        Self::new(handler, config.window, scheduler)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether a window is currently open
    pub fn is_cooling_down(&self) -> bool {
        self.cooling.get()
    }

    pub fn inner(&self) -> &H {
        &self.handler
    }

    /// Forward `args` to the handler unless a window is open.
    ///
    /// The window opens and its reset timer is scheduled before the handler
    /// runs, so a panicking handler still leaves the window in force.
    pub fn call<A>(&self, args: A) -> Admission
    where
        H: Handler<A>,
    {
        if self.cooling.get() {
            tracing::trace!(
                window_ms = self.window.as_millis() as u64,
                "Throttled call dropped"
            );
            return Admission::Dropped;
        }

        self.cooling.set(true);
        let cooling = Rc::clone(&self.cooling);
        self.scheduler.delay(self.window, Box::new(move || cooling.set(false)));

        self.handler.handle(args);
        Admission::Forwarded
    }
}

impl<A, H, S> Handler<A> for Throttle<H, S>
where
    H: Handler<A>,
    S: Scheduler,
{
    fn handle(&self, args: A) {
        let _ = self.call(args);
    }
}

impl<H, S> fmt::Debug for Throttle<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("window", &self.window)
            .field("cooling_down", &self.cooling.get())
            .finish_non_exhaustive()
    }
}
