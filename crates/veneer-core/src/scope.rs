use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::disposables::Disposables;
use crate::host::Host;

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Weak<ScopeInner>>> = const { RefCell::new(None) };
}

/// A bounded lifetime that guarantees release of everything registered
/// inside it. Disposal runs children first, then this scope's disposers
/// in registration order.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    children: RefCell<Vec<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Runs `f` with this scope installed as the current one, restoring
    /// the previous current scope afterwards.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        CURRENT_SCOPE.with(|current| {
            let prev = current.borrow().clone();
            *current.borrow_mut() = Some(Rc::downgrade(&self.inner));
            let result = f();
            *current.borrow_mut() = prev;
            result
        })
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    pub fn child(&self) -> Scope {
        let child = Scope::new();
        self.inner.children.borrow_mut().push(child.clone());
        child
    }

    pub fn dispose(self) {
        let children = std::mem::take(&mut *self.inner.children.borrow_mut());
        for child in children {
            child.dispose();
        }

        let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
        for disposer in disposers {
            disposer();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

pub fn current_scope() -> Option<Scope> {
    CURRENT_SCOPE.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|weak| weak.upgrade().map(|inner| Scope { inner }))
    })
}

/// Runs `f` and registers the cleanup it returns with the current scope.
/// With no scope installed the cleanup is dropped unrun.
pub fn scoped_effect<F>(f: F)
where
    F: FnOnce() -> Box<dyn FnOnce()> + 'static,
{
    if let Some(scope) = current_scope() {
        let cleanup = f();
        scope.add_disposer(cleanup);
    } else {
        log::warn!("scoped_effect outside any scope; cleanup will never run");
        let _ = f();
    }
}

/// A [`Disposables`] registry whose disposal is tied to the current scope.
///
/// The scope, not the registry, decides when the lifetime ends; callers
/// just schedule through the returned handle. Each call makes a fresh
/// registry (one per scope, never a shared singleton).
pub fn scoped_disposables(host: &Host) -> Disposables {
    let d = Disposables::new(host);
    let d2 = d.clone();
    scoped_effect(move || Box::new(move || d2.dispose()));
    d
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        let children = std::mem::take(&mut *self.children.borrow_mut());
        drop(children);

        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers {
            disposer();
        }
    }
}
