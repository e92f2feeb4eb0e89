use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable value; cloneable handle, clones alias the same state.
///
/// Reads and writes borrow a `RefCell`, so the usual single-threaded
/// discipline applies: don't call back into the same signal from inside
/// `with` or `update`.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<T>>);

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    /// Reads without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    pub fn set(&self, v: T) {
        *self.0.borrow_mut() = v;
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut());
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
