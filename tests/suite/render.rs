//! Full-frame rendering through a virtual terminal.

use crossterm::event::KeyCode;

use qrfolio_engine::{App, ProcessId, Section, ThemeMode};
use qrfolio_tui::Palette;

use crate::common::{press, render, still_app, vt_color};

#[test]
fn first_frame_shows_header_and_key_hints() {
    let mut app = still_app(ThemeMode::Dark, ProcessId::Production);
    let terminal = render(&mut app, 100, 30);
    let screen = terminal.backend();

    assert!(screen.row(0).contains("QR Project"));
    assert!(screen.row(0).contains("API"));
    let status = screen.row(29);
    assert!(status.contains("dark"), "{status}");
    assert!(status.contains("quit"), "{status}");
}

#[test]
fn background_switches_with_theme() {
    let mut app = still_app(ThemeMode::Dark, ProcessId::Production);
    let terminal = render(&mut app, 80, 24);
    assert_eq!(
        terminal.backend().bg_at(1, 0),
        Some(vt_color(Palette::dark().bg))
    );

    press(&mut app, KeyCode::Char('t'));
    let terminal = render(&mut app, 80, 24);
    assert_eq!(
        terminal.backend().bg_at(1, 0),
        Some(vt_color(Palette::light().bg))
    );
    assert!(terminal.backend().row(23).contains("light"));
}

#[test]
fn process_tab_shows_selected_category() {
    let mut app = still_app(ThemeMode::Dark, ProcessId::Production);
    press(&mut app, KeyCode::Char('2'));
    app.jump_to(Section::Process);

    let terminal = render(&mut app, 100, 40);
    let contents = terminal.backend().contents();
    assert!(contents.contains("Quality Control"));
    assert!(contents.contains("POST /api/admin/inspection/report"));
    assert!(!contents.contains("POST /api/admin/production/serial"));
}

#[test]
fn narrow_terminal_still_renders() {
    let mut app = App::default();
    let terminal = render(&mut app, 32, 12);
    assert!(terminal.backend().row(0).contains("QR"));
}
