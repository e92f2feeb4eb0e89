use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;
use slotmap::{SlotMap, new_key_type};

/// Key identity, independent of layout-produced text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    F(u8), // F1-F12
}

bitflags! {
    /// Modifier-key state accompanying an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        /// Cmd on Mac, Win key on Windows.
        const META  = 1 << 3;
    }
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

new_key_type! {
    /// Handle for a registered key listener.
    pub struct ListenerId;
}

struct ListenerEntry {
    seq: u64,
    cb: Rc<dyn Fn(&KeyEvent)>,
}

struct KeyEventsInner {
    listeners: SlotMap<ListenerId, ListenerEntry>,
    seq: u64,
}

/// Key-event source: the document-level keydown stream of the host,
/// delivered to listeners in registration order (capturing phase analog).
///
/// Cloneable handle; clones share the listener table. Listener removal is
/// the cleanup a scope adopts via
/// [`Disposables::add`](crate::disposables::Disposables::add).
#[derive(Clone)]
pub struct KeyEvents {
    inner: Rc<RefCell<KeyEventsInner>>,
}

impl KeyEvents {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(KeyEventsInner {
                listeners: SlotMap::with_key(),
                seq: 0,
            })),
        }
    }

    pub fn listen(&self, cb: impl Fn(&KeyEvent) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.seq;
        inner.seq += 1;
        inner.listeners.insert(ListenerEntry {
            seq,
            cb: Rc::new(cb),
        })
    }

    /// Stale handles are ignored.
    pub fn unlisten(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(id);
    }

    /// Delivers `event` to every listener registered before this call.
    /// A listener removed by an earlier listener of the same event is
    /// skipped.
    pub fn emit(&self, event: &KeyEvent) {
        let mut snapshot: Vec<(ListenerId, u64, Rc<dyn Fn(&KeyEvent)>)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (id, l.seq, l.cb.clone()))
            .collect();
        snapshot.sort_by_key(|(_, seq, _)| *seq);

        for (id, _, cb) in snapshot {
            let still_registered = self.inner.borrow().listeners.contains_key(id);
            if still_registered {
                cb(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for KeyEvents {
    fn default() -> Self {
        Self::new()
    }
}
