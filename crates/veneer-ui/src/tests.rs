#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use veneer_core::{
        ComposeGuard, Duration, Host, Key, KeyEvent, KeyEvents, ManualClock, Modifiers, Scope,
    };

    use crate::combobox::{
        ComboboxOptions, remember_combobox_machine, use_combobox_machine, with_combobox,
    };
    use crate::keycaster::{KEY_TTL, KeyCaster, KeyGlyphs};

    const MAC_UA: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko)";
    const WIN_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

    fn manual_host() -> (ManualClock, Host) {
        let clock = ManualClock::new();
        let host = Host::with_clock(clock.clone());
        (clock, host)
    }

    #[test]
    fn glyph_table_selection_sniffs_user_agent() {
        assert_eq!(KeyGlyphs::detect(MAC_UA), KeyGlyphs::Mac);
        assert_eq!(KeyGlyphs::detect(WIN_UA), KeyGlyphs::Windows);
        assert_eq!(KeyGlyphs::detect("Linux x86_64"), KeyGlyphs::Windows);
    }

    #[test]
    fn glyphs_differ_per_platform() {
        let esc = KeyEvent::new(Key::Escape);
        assert_eq!(KeyGlyphs::Mac.display(&esc), "⎋");
        assert_eq!(KeyGlyphs::Windows.display(&esc), "Esc");

        let meta = KeyEvent::new(Key::Meta);
        assert_eq!(KeyGlyphs::Mac.display(&meta), "⌘");
        assert_eq!(KeyGlyphs::Windows.display(&meta), "Win");

        // Unmapped keys fall back to their raw name.
        let a = KeyEvent::new(Key::Character('a'));
        assert_eq!(KeyGlyphs::Mac.display(&a), "a");
        assert_eq!(KeyGlyphs::Windows.display(&a), "a");
    }

    #[test]
    fn shift_prefix_rule() {
        // Shift held, key not Shift: Shift-prefixed table entry or the raw
        // key name; the plain glyph must not be used.
        let shift_tab = KeyEvent::with_modifiers(Key::Tab, Modifiers::SHIFT);
        assert_eq!(KeyGlyphs::Mac.display(&shift_tab), "Tab");

        // The Shift key itself keeps its plain glyph.
        let shift = KeyEvent::with_modifiers(Key::Shift, Modifiers::SHIFT);
        assert_eq!(KeyGlyphs::Mac.display(&shift), "⇧");
    }

    #[test]
    fn keycaster_shows_nothing_before_mount() {
        let (_clock, host) = manual_host();
        let events = KeyEvents::new();
        let caster = KeyCaster::new(&host);

        events.emit(&KeyEvent::new(Key::Enter));
        assert!(!caster.mounted());
        assert_eq!(caster.overlay_line(), None);
    }

    #[test]
    fn keycaster_renders_oldest_first_and_expires_entries() {
        let (clock, host) = manual_host();
        let events = KeyEvents::new();
        let caster = KeyCaster::new(&host);
        caster.mount(&events, MAC_UA);

        events.emit(&KeyEvent::new(Key::ArrowUp));
        clock.advance(Duration::from_millis(1000));
        host.poll_timers();
        events.emit(&KeyEvent::new(Key::Enter));

        assert_eq!(caster.overlay_line().as_deref(), Some("↑ ↵"));

        // First key expires at t=2000, second at t=3000.
        clock.advance(Duration::from_millis(1100));
        host.poll_timers();
        assert_eq!(caster.overlay_line().as_deref(), Some("↵"));

        clock.advance(KEY_TTL);
        host.poll_timers();
        assert_eq!(caster.overlay_line(), None);
    }

    #[test]
    fn keycaster_unmount_cancels_expiry_and_stops_listening() {
        let (clock, host) = manual_host();
        let events = KeyEvents::new();
        let caster = KeyCaster::new(&host);
        caster.mount(&events, WIN_UA);

        events.emit(&KeyEvent::new(Key::Escape));
        assert_eq!(events.listener_count(), 1);

        caster.unmount();
        assert_eq!(events.listener_count(), 0);
        assert!(host.is_idle(), "pending expiry timers must be cancelled");

        // Further events are not observed.
        events.emit(&KeyEvent::new(Key::Escape));
        clock.advance(KEY_TTL + KEY_TTL);
        host.poll_timers();
        assert_eq!(caster.overlay_line().as_deref(), Some("Esc"));
    }

    #[test]
    fn keycaster_scoped_mount_unmounts_with_scope() {
        let (_clock, host) = manual_host();
        let events = KeyEvents::new();
        let caster = KeyCaster::new(&host);

        let scope = Scope::new();
        scope.run(|| caster.mount_scoped(&events, MAC_UA));

        events.emit(&KeyEvent::new(Key::Enter));
        assert_eq!(events.listener_count(), 1);
        assert_eq!(caster.overlay_line().as_deref(), Some("↵"));

        scope.dispose();
        assert_eq!(events.listener_count(), 0);
        assert!(host.is_idle(), "expiry timers cancelled with the scope");
    }

    #[test]
    fn combobox_accessor_requires_a_provider() {
        let err = use_combobox_machine::<String>("ComboboxInput").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("<ComboboxInput />"), "got: {msg}");
        assert!(msg.contains("<Combobox />"), "got: {msg}");
    }

    #[test]
    fn combobox_provider_exposes_machine_to_subtree() {
        let guard = ComposeGuard::begin();
        let machine = guard.scope().run(|| {
            remember_combobox_machine::<String>(ComboboxOptions { demo_mode: true })
        });

        with_combobox(machine.clone(), || {
            let found = use_combobox_machine::<String>("ComboboxOptions").unwrap();
            assert!(Rc::ptr_eq(&machine, &found));
            assert!(found.options().demo_mode);
        });

        // Outside the provider the machine is gone again.
        assert!(use_combobox_machine::<String>("ComboboxOptions").is_err());
    }

    #[test]
    fn combobox_machine_is_constructed_once_per_scope() {
        let first = {
            let _guard = ComposeGuard::begin();
            remember_combobox_machine::<u32>(ComboboxOptions::default())
        };
        let second = {
            let _guard = ComposeGuard::begin();
            remember_combobox_machine::<u32>(ComboboxOptions { demo_mode: true })
        };
        // Same slot, same machine; the first pass's options win.
        assert!(Rc::ptr_eq(&first, &second));
        assert!(!second.options().demo_mode);
    }
}
