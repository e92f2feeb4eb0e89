//! Scoped tracking of deferred work.
//!
//! A [`Disposables`] registry collects one cancellation thunk per piece of
//! deferred work scheduled through it (frame callbacks, timers, adopted
//! cleanups). When the owning scope ends, a single [`Disposables::dispose`]
//! cancels everything that has not fired yet.
//!
//! ```rust
//! use veneer_core::{Disposables, Host};
//! use web_time::Duration;
//!
//! let host = Host::new();
//! let d = Disposables::new(&host);
//! d.set_timeout(|| println!("never happens"), Duration::from_millis(100));
//! d.dispose();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use web_time::Duration;

use crate::host::Host;

type CancelThunk = Box<dyn FnOnce()>;

struct Inner {
    host: Host,
    pending: RefCell<SmallVec<[CancelThunk; 4]>>,
}

/// Ordered registry of cancellation thunks for one scope.
///
/// Cloning yields another handle to the same registry (the closure a
/// scheduling method captures uses this to route nested work back through
/// itself). All operations are total: there is nothing to fail.
#[derive(Clone)]
pub struct Disposables {
    inner: Rc<Inner>,
}

impl Disposables {
    pub fn new(host: &Host) -> Self {
        Self {
            inner: Rc::new(Inner {
                host: host.clone(),
                pending: RefCell::new(SmallVec::new()),
            }),
        }
    }

    /// Schedules `cb` on the next frame tick and tracks its cancellation.
    pub fn request_animation_frame(&self, cb: impl FnOnce() + 'static) {
        let id = self.inner.host.request_frame(cb);
        let host = self.inner.host.clone();
        self.add(move || host.cancel_frame(id));
    }

    /// Schedules `cb` after *two* frame ticks, letting one layout pass
    /// settle first. The inner schedule is routed back through this
    /// registry, so disposal between the two ticks still cancels it.
    pub fn next_frame(&self, cb: impl FnOnce() + 'static) {
        let d = self.clone();
        self.request_animation_frame(move || {
            d.request_animation_frame(cb);
        });
    }

    /// Schedules `cb` after `delay` and tracks its cancellation. Clearing
    /// a timer that already fired is a no-op on the host side, so a stale
    /// entry left behind by a fired timer is harmless.
    pub fn set_timeout(&self, cb: impl FnOnce() + 'static, delay: Duration) {
        let id = self.inner.host.set_timeout(cb, delay);
        let host = self.inner.host.clone();
        self.add(move || host.clear_timeout(id));
    }

    /// Adopts an externally created cleanup (listener removal, etc.) into
    /// this registry's lifecycle.
    pub fn add(&self, cleanup: impl FnOnce() + 'static) {
        self.inner.pending.borrow_mut().push(Box::new(cleanup));
    }

    /// Invokes every pending cancellation thunk in registration order and
    /// clears the list.
    ///
    /// Safe to call any number of times; later calls with nothing pending
    /// do nothing. The list is taken whole before iterating, so a thunk
    /// that re-enters `dispose` finds an empty registry, and anything
    /// registered mid-disposal lands on the fresh list (retained until a
    /// later `dispose`, never re-disposed automatically).
    pub fn dispose(&self) {
        let drained = std::mem::take(&mut *self.inner.pending.borrow_mut());
        if drained.is_empty() {
            return;
        }
        log::trace!("disposing {} pending cancellation(s)", drained.len());
        for cancel in drained {
            cancel();
        }
    }

    /// Number of tracked cancellations still pending.
    pub fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// The host this registry schedules through.
    pub fn host(&self) -> &Host {
        &self.inner.host
    }
}
