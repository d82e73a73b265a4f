//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use qrfolio_engine::{App, LaunchOptions, ProcessId, ThemeMode, UiOptions};

use crate::vt100_backend::VirtualTerminal;

/// App with animations disabled so every frame shows settled output.
pub fn still_app(theme: ThemeMode, process: ProcessId) -> App {
    App::new(LaunchOptions {
        theme,
        process,
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..LaunchOptions::default()
    })
}

/// Renders one frame of `app` into a fresh virtual terminal.
pub fn render(app: &mut App, width: u16, height: u16) -> Terminal<VirtualTerminal> {
    let mut terminal =
        Terminal::new(VirtualTerminal::new(width, height)).expect("virtual terminal");
    terminal
        .draw(|frame| qrfolio_tui::draw(frame, app))
        .expect("draw frame");
    terminal
}

/// Feeds a key press through the same path as the live input pump.
pub fn press(app: &mut App, code: KeyCode) -> bool {
    qrfolio_tui::apply_event(app, &Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Converts a palette color to the color vt100 reports for it.
pub fn vt_color(color: ratatui::style::Color) -> vt100::Color {
    match color {
        ratatui::style::Color::Rgb(r, g, b) => vt100::Color::Rgb(r, g, b),
        ratatui::style::Color::Indexed(i) => vt100::Color::Idx(i),
        _ => vt100::Color::Default,
    }
}
