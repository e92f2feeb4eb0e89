//! # Composition locals
//!
//! Thread-local, dynamically scoped values keyed by type. A provider wraps
//! a subtree:
//!
//! ```rust
//! use veneer_core::locals::{with_local, try_local};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Density(f32);
//!
//! with_local(Density(2.0), || {
//!     assert_eq!(try_local::<Density>(), Some(Density(2.0)));
//! });
//! assert_eq!(try_local::<Density>(), None);
//! ```
//!
//! Inner frames shadow outer ones; the innermost provider of a type wins.
//! `require_local` is for components that cannot work without an ancestor
//! provider and want a descriptive error rather than a default.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::Location;

use crate::error::ContextError;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> =
        const { RefCell::new(Vec::new()) };
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

/// Provides `value` as the local of type `T` for the duration of `f`.
pub fn with_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided local of type `T`, if any.
pub fn try_local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Some(t.clone());
            }
        }
        None
    })
}

/// Innermost provided local of type `T`, or its `Default`.
pub fn local_or_default<T: Clone + Default + 'static>() -> T {
    try_local::<T>().unwrap_or_default()
}

/// Innermost provided local of type `T`, or a [`ContextError`] naming the
/// component that asked, the provider it needs, and the call site.
#[track_caller]
pub fn require_local<T: Clone + 'static>(
    component: &str,
    provider: &'static str,
) -> Result<T, ContextError> {
    let location = Location::caller();
    match try_local::<T>() {
        Some(v) => Ok(v),
        None => Err(ContextError::MissingContext {
            component: component.to_owned(),
            provider,
            location,
        }),
    }
}
