use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Slot storage for `remember`. Ordered slots rewind to the start of the
/// sequence each composition pass, so the Nth call always lands on the
/// Nth slot.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
}

/// Rewinds the slot cursor and owns the root scope for one composition
/// pass. The guard does not dispose the scope; the owner decides when the
/// lifetime ends.
pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| {
            c.borrow_mut().cursor = 0;
        });

        ComposeGuard {
            scope: Scope::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Slot-based remember (sequential composition only): the value built by
/// the first pass is returned by every later pass at the same position.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 Conditional composition around a remember call does this.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}
