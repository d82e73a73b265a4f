//! Core engine for qrfolio - application state.
//!
//! This crate contains the App state without TUI dependencies. The renderer
//! reads from it once per frame; input handling mutates it between frames.

use std::path::PathBuf;
use std::time::{Duration, Instant};

mod nav;
mod process_flow;
mod theme;

pub use nav::NavDrawer;
pub use process_flow::ProcessFlowViewer;
pub use theme::ThemeController;

pub use qrfolio_config::{PortfolioConfig, THEME_ENV_VAR, theme_from_env};
pub use qrfolio_types::content::Section;
pub use qrfolio_types::ui::{
    AnimPhase, EffectTimer, RevealLatch, RevealPhase, ScrollState, UiOptions,
};
pub use qrfolio_types::{ProcessCategory, ProcessId, Step, StepKind, ThemeMode, ThemeState};

/// Entrance animation length for a page section.
pub const SECTION_REVEAL_DURATION: Duration = Duration::from_millis(500);
/// Slide-in length when the process tab changes.
pub const PROCESS_SWITCH_DURATION: Duration = Duration::from_millis(300);

// ============================================================================
// Launch options
// ============================================================================

/// Where theme toggles are written, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemePersistence {
    #[default]
    Off,
    ConfigFile(PathBuf),
}

/// Resolved startup settings (CLI, env and config already merged).
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub theme: ThemeMode,
    pub process: ProcessId,
    pub ui_options: UiOptions,
    pub persistence: ThemePersistence,
}

impl LaunchOptions {
    /// Merges launch sources. Earlier sources win: `cli`, then `env`, then `config`.
    #[must_use]
    pub fn resolve(
        cli_theme: Option<ThemeMode>,
        env_theme: Option<ThemeMode>,
        config: Option<&PortfolioConfig>,
    ) -> Self {
        let theme = cli_theme
            .or(env_theme)
            .or_else(|| config.and_then(PortfolioConfig::theme))
            .unwrap_or_default();
        let ui_options = config.map(PortfolioConfig::ui_options).unwrap_or_default();
        let remember = config.is_some_and(PortfolioConfig::remember_theme);
        let persistence = match PortfolioConfig::path() {
            Some(path) if remember => ThemePersistence::ConfigFile(path),
            _ => ThemePersistence::Off,
        };
        Self {
            theme,
            process: ProcessId::default(),
            ui_options,
            persistence,
        }
    }
}

// ============================================================================
// View state
// ============================================================================

#[derive(Debug)]
struct ViewState {
    scroll: ScrollState,
    viewport_height: u16,
    reveals: [RevealLatch; Section::ALL.len()],
    process_effect: Option<EffectTimer>,
    pending_jump: Option<Section>,
    ui_options: UiOptions,
    last_frame: Instant,
}

impl ViewState {
    fn new(ui_options: UiOptions) -> Self {
        Self {
            scroll: ScrollState::default(),
            viewport_height: 0,
            reveals: Default::default(),
            process_effect: None,
            pending_jump: None,
            ui_options,
            last_frame: Instant::now(),
        }
    }

    fn effect_duration(&self, duration: Duration) -> Duration {
        if self.ui_options.reduced_motion {
            Duration::ZERO
        } else {
            duration
        }
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    theme: ThemeController,
    process_flow: ProcessFlowViewer,
    nav: NavDrawer,
    view: ViewState,
    persistence: ThemePersistence,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(options: LaunchOptions) -> Self {
        let mut app = Self {
            theme: ThemeController::with_mode(options.theme),
            process_flow: ProcessFlowViewer::with_active(options.process),
            nav: NavDrawer::default(),
            view: ViewState::new(options.ui_options),
            persistence: options.persistence,
            should_quit: false,
        };
        // The hero animates on mount rather than on scroll.
        app.mark_visible(Section::Hero);
        tracing::info!(
            theme = %app.theme.mode(),
            process = %app.process_flow.active_id(),
            "App initialized"
        );
        app
    }

    // ---- theme -------------------------------------------------------------

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    #[must_use]
    pub fn theme_state(&self) -> ThemeState {
        self.theme.read()
    }

    /// Flips the theme, writing it to the config file when persistence is on.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        let mode = self.theme.mode();
        tracing::debug!(theme = %mode, "Theme toggled");

        if let ThemePersistence::ConfigFile(path) = &self.persistence
            && let Err(err) = qrfolio_config::persist_theme(path, mode)
        {
            tracing::warn!("Failed to persist theme: {err}");
        }
    }

    // ---- process flow ------------------------------------------------------

    #[must_use]
    pub fn process_flow(&self) -> &ProcessFlowViewer {
        &self.process_flow
    }

    pub fn select_process(&mut self, id: ProcessId) {
        let changed = self.process_flow.select_process(id);
        self.on_process_selected(changed);
    }

    pub fn select_next_process(&mut self) {
        let changed = self.process_flow.select_next();
        self.on_process_selected(changed);
    }

    pub fn select_previous_process(&mut self) {
        let changed = self.process_flow.select_previous();
        self.on_process_selected(changed);
    }

    fn on_process_selected(&mut self, changed: bool) {
        if !changed {
            return;
        }
        tracing::debug!(process = %self.process_flow.active_id(), "Process selected");
        let duration = self.view.effect_duration(PROCESS_SWITCH_DURATION);
        self.view.process_effect = Some(EffectTimer::new(duration));
    }

    /// Slide-in state of the process content after a tab switch.
    #[must_use]
    pub fn process_effect_phase(&self) -> AnimPhase {
        self.view
            .process_effect
            .as_ref()
            .map_or(AnimPhase::Completed, EffectTimer::phase)
    }

    // ---- navigation --------------------------------------------------------

    #[must_use]
    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn toggle_nav(&mut self) {
        self.nav.toggle();
    }

    pub fn close_nav(&mut self) {
        self.nav.close();
    }

    /// Jumps to the nav item at `index` (zero-based) and closes the drawer.
    pub fn choose_nav(&mut self, index: usize) {
        if let Some(item) = self.nav.choose(index) {
            self.jump_to(item.target);
        }
    }

    /// Requests a scroll to `section`; the renderer resolves its line offset.
    pub fn jump_to(&mut self, section: Section) {
        self.view.pending_jump = Some(section);
    }

    pub fn take_pending_jump(&mut self) -> Option<Section> {
        self.view.pending_jump.take()
    }

    // ---- scrolling ---------------------------------------------------------

    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.view.scroll.offset()
    }

    /// Records the body viewport and content size after layout.
    pub fn update_viewport(&mut self, viewport_height: u16, content_height: usize) {
        let content = u16::try_from(content_height).unwrap_or(u16::MAX);
        self.view.viewport_height = viewport_height;
        self.view.scroll.set_max(content.saturating_sub(viewport_height));
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.view.scroll.scroll_by(delta);
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.view.scroll.scroll_to(offset);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.page_step()));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.page_step()));
    }

    fn page_step(&self) -> u16 {
        self.view.viewport_height.saturating_sub(2).max(1)
    }

    pub fn scroll_to_top(&mut self) {
        self.view.scroll.scroll_to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.view.scroll.scroll_to_bottom();
    }

    // ---- entrance animations -----------------------------------------------

    /// Latches `section` as seen; its entrance effect runs once.
    pub fn mark_visible(&mut self, section: Section) {
        let duration = self.view.effect_duration(SECTION_REVEAL_DURATION);
        if self.view.reveals[section.index()].trigger(duration) {
            tracing::trace!(?section, "Section revealed");
        }
    }

    #[must_use]
    pub fn reveal_phase(&self, section: Section) -> RevealPhase {
        self.view.reveals[section.index()].phase()
    }

    /// Advance animations by wall-clock time since the last frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance_animations(delta);
    }

    pub fn advance_animations(&mut self, delta: Duration) {
        for latch in &mut self.view.reveals {
            latch.advance(delta);
        }
        if let Some(effect) = self.view.process_effect.as_mut() {
            effect.advance(delta);
            if effect.is_finished() {
                self.view.process_effect = None;
            }
        }
    }

    // ---- misc --------------------------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(LaunchOptions::default())
    }
}

#[cfg(test)]
mod tests;
