//! Per-section renderers. Each receives the resolved [`RenderCtx`]
//! (theme, palette, glyphs, width) as an explicit argument.
//!
//! [`RenderCtx`]: crate::page::RenderCtx

mod data;
mod footer;
mod intro;
mod process_flow;
mod status;

pub use data::{api, database};
pub use footer::footer;
pub use intro::{architecture, hero, tech_stack};
pub use process_flow::process_flow;
pub use status::{goals, progress};
