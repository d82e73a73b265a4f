//! Core domain types for qrfolio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the theme flag, the process-flow catalog, the static page content, and animation timers.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod content;
mod process;
mod theme;
pub mod ui;

pub use process::{
    PROCESS_CATALOG, ProcessCategory, ProcessId, Step, StepKind, UnknownProcessError,
    find_process,
};
pub use theme::{ThemeMode, ThemeParseError, ThemeState};

/// Color roles used by content data.
///
/// The renderer maps each role to a concrete terminal color; content never
/// names RGB values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Violet,
    Emerald,
    Pink,
    Cyan,
    Orange,
    Rose,
    Blue,
    Green,
    Gray,
    Yellow,
    Purple,
    Amber,
    Slate,
}
