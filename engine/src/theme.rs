//! Dark/light theme ownership.

use qrfolio_types::{ThemeMode, ThemeState};

/// Single source of truth for the presentation mode.
///
/// Sections never look the theme up themselves; the renderer reads it once
/// per frame and passes the resolved palette down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Starts in dark mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Flips between dark and light.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    #[must_use]
    pub fn read(&self) -> ThemeState {
        ThemeState::from(self.mode)
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use qrfolio_types::ThemeMode;

    use super::ThemeController;

    #[test]
    fn initializes_dark() {
        assert!(ThemeController::new().read().dark_mode);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..7 {
            let mut theme = ThemeController::new();
            for _ in 0..n {
                theme.toggle();
            }
            assert_eq!(theme.read().dark_mode, n % 2 == 0, "after {n} toggles");
        }
    }

    #[test]
    fn double_toggle_restores() {
        let mut theme = ThemeController::with_mode(ThemeMode::Light);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }
}
