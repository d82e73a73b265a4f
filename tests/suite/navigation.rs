//! Keyboard-driven navigation across frames.

use crossterm::event::KeyCode;

use qrfolio_engine::{ProcessId, RevealPhase, Section, ThemeMode};

use crate::common::{press, render, still_app};

#[test]
fn drawer_jump_scrolls_and_reveals_target() {
    let mut app = still_app(ThemeMode::Dark, ProcessId::Production);
    render(&mut app, 100, 30);

    press(&mut app, KeyCode::Char('m'));
    let terminal = render(&mut app, 100, 30);
    assert!(terminal.backend().contents().contains("Menu"));

    press(&mut app, KeyCode::Char('4'));
    assert!(!app.nav_open());
    let terminal = render(&mut app, 100, 30);
    assert!(app.scroll_offset() > 0);
    assert!(terminal.backend().contents().contains("RESTful API"));
    assert_eq!(app.reveal_phase(Section::Api), RevealPhase::Shown);
}

#[test]
fn end_key_reaches_footer() {
    let mut app = still_app(ThemeMode::Light, ProcessId::Production);
    render(&mut app, 100, 30);

    press(&mut app, KeyCode::End);
    let terminal = render(&mut app, 100, 30);
    assert!(terminal.backend().contents().contains("All rights reserved."));
    assert_eq!(app.reveal_phase(Section::Footer), RevealPhase::Shown);

    press(&mut app, KeyCode::Home);
    let terminal = render(&mut app, 100, 30);
    assert_eq!(app.scroll_offset(), 0);
    assert!(!terminal.backend().contents().contains("All rights reserved."));
}

#[test]
fn offscreen_sections_stay_hidden_until_scrolled_to() {
    let mut app = still_app(ThemeMode::Dark, ProcessId::Production);
    render(&mut app, 100, 30);
    assert_eq!(app.reveal_phase(Section::Goals), RevealPhase::Hidden);

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('6'));
    render(&mut app, 100, 30);
    assert_eq!(app.reveal_phase(Section::Goals), RevealPhase::Shown);
}

#[test]
fn quitting_from_any_state() {
    let mut app = still_app(ThemeMode::Dark, ProcessId::Production);
    press(&mut app, KeyCode::Char('m'));
    assert!(press(&mut app, KeyCode::Char('q')));
}
