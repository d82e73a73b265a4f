//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod reveal;
mod view_state;

pub use animation::{AnimPhase, EffectTimer};
pub use reveal::{RevealLatch, RevealPhase};
pub use view_state::{ScrollState, UiOptions};
