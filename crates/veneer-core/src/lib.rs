//! # Scoped disposal and host scheduling
//!
//! Veneer's core is built around one rule: deferred work never outlives
//! the scope that scheduled it. Three pieces enforce it:
//!
//! - [`Host`] — the platform's frame/timer scheduler, as cancellable
//!   handles.
//! - [`Disposables`] — an ordered registry of cancellation thunks; one per
//!   scope, drained exactly when the scope ends.
//! - [`Scope`] — a bounded lifetime that runs its disposers (children
//!   first) on disposal.
//!
//! ## Disposables
//!
//! Everything scheduled through a registry is cancelled by a single
//! `dispose()`:
//!
//! ```rust
//! use veneer_core::{Disposables, Host, ManualClock};
//! use web_time::Duration;
//!
//! let clock = ManualClock::new();
//! let host = Host::with_clock(clock.clone());
//! let d = Disposables::new(&host);
//!
//! d.set_timeout(|| unreachable!("cancelled"), Duration::from_millis(100));
//! d.dispose();
//!
//! clock.advance(Duration::from_millis(200));
//! host.poll_timers(); // nothing fires
//! ```
//!
//! `dispose()` is idempotent and safe to call from inside one of its own
//! cancellation thunks; the pending list is taken whole before iterating.
//!
//! ## Scopes and effects
//!
//! [`scoped_disposables`] ties a registry to the current [`Scope`], the
//! way a mounted component ties cleanup to its unmount:
//!
//! ```rust
//! use veneer_core::{Host, Scope, scoped_disposables};
//! use web_time::Duration;
//!
//! let host = Host::new();
//! let scope = Scope::new();
//! scope.run(|| {
//!     let d = scoped_disposables(&host);
//!     d.set_timeout(|| {}, Duration::from_millis(50));
//! });
//! scope.dispose(); // timer cancelled here
//! ```
//!
//! ## Composition locals
//!
//! [`locals`] carries dynamically scoped values down a composition;
//! [`locals::require_local`] is the fail-fast accessor for components
//! that need an ancestor provider, returning a [`ContextError`] that
//! names the component, the missing provider, and the call site.

pub mod clock;
pub mod disposables;
pub mod effects;
pub mod error;
pub mod host;
pub mod input;
pub mod locals;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;

pub use clock::*;
pub use disposables::*;
pub use effects::*;
pub use error::*;
pub use host::*;
pub use input::*;
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
