//! Scripted KeyCaster session over a manual clock, so the transcript is
//! the same on every run. Shows the overlay filling up, entries expiring
//! after their window, and unmount cancelling everything pending.

use anyhow::Result;
use veneer_core::{Duration, Host, Key, KeyEvent, KeyEvents, ManualClock, Modifiers};
use veneer_ui::KeyCaster;

const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

fn show(caster: &KeyCaster, at_ms: u64) {
    match caster.overlay_line() {
        Some(line) => println!("t={at_ms:>5}ms  [ {line} ]"),
        None => println!("t={at_ms:>5}ms  (overlay hidden)"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let clock = ManualClock::new();
    let host = Host::with_clock(clock.clone());
    let events = KeyEvents::new();

    let caster = KeyCaster::new(&host);
    caster.mount(&events, MAC_UA);
    log::info!("mounted keycaster");

    let script: &[(u64, KeyEvent)] = &[
        (0, KeyEvent::new(Key::Meta)),
        (120, KeyEvent::new(Key::Character('k'))),
        (600, KeyEvent::new(Key::ArrowDown)),
        (900, KeyEvent::new(Key::ArrowDown)),
        (1400, KeyEvent::with_modifiers(Key::Tab, Modifiers::SHIFT)),
        (1800, KeyEvent::new(Key::Enter)),
    ];

    let mut t = 0u64;
    for (at, event) in script {
        clock.advance(Duration::from_millis(at - t));
        t = *at;
        host.poll_timers();
        events.emit(event);
        show(&caster, t);
    }

    // Let the early keys expire one by one.
    for _ in 0..6 {
        clock.advance(Duration::from_millis(500));
        t += 500;
        host.poll_timers();
        show(&caster, t);
    }

    caster.unmount();
    log::info!("unmounted; host idle: {}", host.is_idle());
    Ok(())
}
