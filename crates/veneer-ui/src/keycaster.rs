//! Transient overlay showing recently pressed keys.
//!
//! Listens on a [`KeyEvents`] source, renders each key as a platform
//! glyph, and expires every entry after a fixed window. All deferred work
//! (the expiry timers, the listener removal) goes through one
//! [`Disposables`] registry, so `unmount` cancels everything at once.

use std::cell::RefCell;
use std::rc::Rc;

use veneer_core::{
    Disposables, Duration, Host, Key, KeyEvent, KeyEvents, Modifiers, Signal, effect, on_unmount,
    signal,
};

/// How long a pressed key stays on the overlay.
pub const KEY_TTL: Duration = Duration::from_millis(2000);

const MAC_GLYPHS: &[(&str, &str)] = &[
    ("ArrowUp", "↑"),
    ("ArrowDown", "↓"),
    ("ArrowLeft", "←"),
    ("ArrowRight", "→"),
    ("Home", "↖"),
    ("End", "↘"),
    ("Alt", "⌥"),
    ("CapsLock", "⇪"),
    ("Meta", "⌘"),
    ("Shift", "⇧"),
    ("Control", "⌃"),
    ("Backspace", "⌫"),
    ("Delete", "⌦"),
    ("Enter", "↵"),
    ("Escape", "⎋"),
    ("Tab", "↹"),
    ("PageUp", "⇞"),
    ("PageDown", "⇟"),
    (" ", "␣"),
];

const WINDOWS_GLYPHS: &[(&str, &str)] = &[
    ("ArrowUp", "↑"),
    ("ArrowDown", "↓"),
    ("ArrowLeft", "←"),
    ("ArrowRight", "→"),
    ("Meta", "Win"),
    ("Control", "Ctrl"),
    ("Backspace", "⌫"),
    ("Delete", "Del"),
    ("Escape", "Esc"),
    ("PageUp", "PgUp"),
    ("PageDown", "PgDn"),
    (" ", "␣"),
];

/// Platform glyph set. Binary choice, made once per mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyGlyphs {
    Mac,
    Windows,
}

impl KeyGlyphs {
    /// Sniffs the user-agent string: Mac glyphs on "Mac OS X", Windows
    /// glyphs everywhere else.
    pub fn detect(user_agent: &str) -> Self {
        if user_agent.contains("Mac OS X") {
            KeyGlyphs::Mac
        } else {
            KeyGlyphs::Windows
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            KeyGlyphs::Mac => MAC_GLYPHS,
            KeyGlyphs::Windows => WINDOWS_GLYPHS,
        }
    }

    fn lookup(self, name: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, g)| *g)
    }

    /// Glyph shown for one keydown. With Shift held (and the key not
    /// itself Shift) a `Shift`-prefixed table entry is preferred, falling
    /// back to the raw key name; otherwise the plain entry is used.
    pub fn display(self, event: &KeyEvent) -> String {
        let name = key_name(event.key);
        if event.modifiers.contains(Modifiers::SHIFT) && event.key != Key::Shift {
            self.lookup(&format!("Shift{name}"))
                .map(str::to_owned)
                .unwrap_or(name)
        } else {
            self.lookup(&name).map(str::to_owned).unwrap_or(name)
        }
    }
}

/// Key name as the glyph tables key it ("ArrowUp", " ", "a", "F5").
fn key_name(key: Key) -> String {
    match key {
        Key::Character(c) => c.to_string(),
        Key::Space => " ".to_string(),
        Key::Enter => "Enter".to_string(),
        Key::Tab => "Tab".to_string(),
        Key::Backspace => "Backspace".to_string(),
        Key::Delete => "Delete".to_string(),
        Key::Escape => "Escape".to_string(),
        Key::ArrowLeft => "ArrowLeft".to_string(),
        Key::ArrowRight => "ArrowRight".to_string(),
        Key::ArrowUp => "ArrowUp".to_string(),
        Key::ArrowDown => "ArrowDown".to_string(),
        Key::Home => "Home".to_string(),
        Key::End => "End".to_string(),
        Key::PageUp => "PageUp".to_string(),
        Key::PageDown => "PageDown".to_string(),
        Key::Shift => "Shift".to_string(),
        Key::Control => "Control".to_string(),
        Key::Alt => "Alt".to_string(),
        Key::Meta => "Meta".to_string(),
        Key::CapsLock => "CapsLock".to_string(),
        Key::F(n) => format!("F{n}"),
    }
}

/// The overlay state. Keys are kept newest-first; each entry expires off
/// the tail after [`KEY_TTL`].
pub struct KeyCaster {
    keys: Signal<Vec<String>>,
    glyphs: Rc<RefCell<Option<KeyGlyphs>>>,
    disposables: Disposables,
}

impl KeyCaster {
    /// Creates an unmounted overlay. Nothing renders and nothing is
    /// listened to until [`mount`](Self::mount); pre-render environments
    /// see the same (empty) output as the host that is not yet mounted.
    pub fn new(host: &Host) -> Self {
        Self {
            keys: signal(Vec::new()),
            glyphs: Rc::new(RefCell::new(None)),
            disposables: Disposables::new(host),
        }
    }

    /// Selects the glyph table for this session and starts listening on
    /// `events`. Listener removal is adopted into the overlay's registry.
    pub fn mount(&self, events: &KeyEvents, user_agent: &str) {
        let chosen = KeyGlyphs::detect(user_agent);
        *self.glyphs.borrow_mut() = Some(chosen);
        log::debug!("keycaster mounted with {chosen:?} glyphs");

        let keys = self.keys.clone();
        let glyphs = self.glyphs.clone();
        let d = self.disposables.clone();
        let id = events.listen(move |event| {
            let Some(g) = *glyphs.borrow() else {
                return;
            };
            let shown = g.display(event);
            keys.update(|k| k.insert(0, shown));

            // Expire the oldest entry once the window elapses.
            let keys = keys.clone();
            d.set_timeout(
                move || {
                    keys.update(|k| {
                        k.pop();
                    });
                },
                KEY_TTL,
            );
        });

        let events = events.clone();
        self.disposables.add(move || events.unlisten(id));
    }

    /// Mounts tied to the current scope: disposing the scope unmounts the
    /// overlay (removes the listener, cancels every pending expiry).
    pub fn mount_scoped(&self, events: &KeyEvents, user_agent: &str) {
        self.mount(events, user_agent);
        let d = self.disposables.clone();
        effect(move || on_unmount(move || d.dispose()));
    }

    /// Stops listening and cancels every pending expiry.
    pub fn unmount(&self) {
        self.disposables.dispose();
    }

    pub fn mounted(&self) -> bool {
        self.glyphs.borrow().is_some()
    }

    /// Rendered overlay text, oldest key first, or `None` when nothing is
    /// on screen.
    pub fn overlay_line(&self) -> Option<String> {
        self.keys.with(|keys| {
            if keys.is_empty() {
                None
            } else {
                let line: Vec<&str> = keys.iter().rev().map(String::as_str).collect();
                Some(line.join(" "))
            }
        })
    }
}
