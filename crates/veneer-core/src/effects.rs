use std::cell::RefCell;
use std::rc::Rc;

/// A cleanup that runs at most once, however many handles exist.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs the cleanup if it has not run yet.
    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }
}

/// Runs `f` now and registers its returned cleanup with the current scope
/// (if any), so scope disposal tears the effect down.
pub fn effect<F>(f: F) -> Dispose
where
    F: FnOnce() -> Dispose + 'static,
{
    let d = f();

    if let Some(scope) = crate::scope::current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }

    d
}

/// Wraps `f` as the cleanup an effect hands back.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}
