//! Host scheduling primitives.
//!
//! `Host` stands in for the platform's frame and timer scheduler: "run this
//! on the next frame tick" and "run this after a delay", both cancellable
//! by handle. A platform runner drives it from its event loop
//! (`run_frame` per redraw, `poll_timers` when `next_deadline` passes);
//! tests drive it by hand over a [`ManualClock`](crate::clock::ManualClock).
//!
//! Everything is single-threaded and cooperative: callbacks run to
//! completion on the caller's thread, in well-defined order.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

new_key_type! {
    /// Handle for a pending frame callback.
    pub struct FrameId;
    /// Handle for a pending timer.
    pub struct TimerId;
}

type Callback = Box<dyn FnOnce()>;

struct FrameEntry {
    seq: u64,
    cb: Callback,
}

struct TimerEntry {
    deadline: Instant,
    seq: u64,
    cb: Callback,
}

struct HostInner {
    clock: Box<dyn Clock>,
    frames: SlotMap<FrameId, FrameEntry>,
    timers: SlotMap<TimerId, TimerEntry>,
    // Registration order within a tick; slotmap iteration order is not it.
    seq: u64,
}

impl HostInner {
    fn next_seq(&mut self) -> u64 {
        let s = self.seq;
        self.seq += 1;
        s
    }
}

/// Cloneable handle to one frame/timer scheduler. Clones share state.
#[derive(Clone)]
pub struct Host {
    inner: Rc<RefCell<HostInner>>,
}

impl Host {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HostInner {
                clock: Box::new(clock),
                frames: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                seq: 0,
            })),
        }
    }

    pub fn now(&self) -> Instant {
        self.inner.borrow().clock.now()
    }

    /// Schedules `cb` for the next frame tick.
    pub fn request_frame(&self, cb: impl FnOnce() + 'static) -> FrameId {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq();
        inner.frames.insert(FrameEntry {
            seq,
            cb: Box::new(cb),
        })
    }

    /// Cancels a pending frame callback. Stale handles (already fired or
    /// already cancelled) are ignored.
    pub fn cancel_frame(&self, id: FrameId) {
        self.inner.borrow_mut().frames.remove(id);
    }

    /// Schedules `cb` once `delay` has elapsed on the host clock.
    pub fn set_timeout(&self, cb: impl FnOnce() + 'static, delay: Duration) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.clock.now() + delay;
        let seq = inner.next_seq();
        inner.timers.insert(TimerEntry {
            deadline,
            seq,
            cb: Box::new(cb),
        })
    }

    /// Cancels a pending timer. Stale handles are ignored.
    pub fn clear_timeout(&self, id: TimerId) {
        self.inner.borrow_mut().timers.remove(id);
    }

    /// Earliest pending timer deadline, for event-loop integration.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .borrow()
            .timers
            .values()
            .map(|t| t.deadline)
            .min()
    }

    /// Runs one frame tick: fires every callback registered before this
    /// call, in registration order. Callbacks registered while the tick is
    /// running land on the *next* tick.
    pub fn run_frame(&self) {
        let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
        let mut due: Vec<FrameEntry> = frames.into_iter().map(|(_, e)| e).collect();
        due.sort_by_key(|e| e.seq);
        log::trace!("frame tick: {} callback(s)", due.len());
        for entry in due {
            (entry.cb)();
        }
    }

    /// Fires every timer whose deadline has passed, in deadline order
    /// (registration order breaks ties). Timers that a fired callback
    /// schedules are picked up too if already due.
    pub fn poll_timers(&self) {
        loop {
            let next = {
                let inner = self.inner.borrow();
                let now = inner.clock.now();
                inner
                    .timers
                    .iter()
                    .filter(|(_, t)| t.deadline <= now)
                    .min_by_key(|(_, t)| (t.deadline, t.seq))
                    .map(|(id, _)| id)
            };
            let Some(id) = next else { break };
            // Remove before firing so a cancel from inside the callback is
            // a clean no-op.
            let entry = self.inner.borrow_mut().timers.remove(id);
            if let Some(entry) = entry {
                (entry.cb)();
            }
        }
    }

    /// True when no frame callback or timer is pending.
    pub fn is_idle(&self) -> bool {
        let inner = self.inner.borrow();
        inner.frames.is_empty() && inner.timers.is_empty()
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}
