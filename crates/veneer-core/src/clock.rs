use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Time source for a [`crate::host::Host`].
///
/// Clocks are owned by the host that reads them, never installed globally:
/// a test that wants deterministic time builds its host over a
/// [`ManualClock`] and keeps the handle.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

/// Wall clock. What platform runners use.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you drive deterministically. Cloning yields a handle to the
/// same instant, so tests can hold one end while the host reads the other.
#[derive(Clone)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, dt: Duration) {
        self.t.set(self.t.get() + dt);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}
