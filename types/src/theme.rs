//! Light/dark presentation mode.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The two presentation modes. Dark is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn from_dark(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode. Applying this twice yields the original mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected `dark` or `light`)")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// Snapshot of the theme flag as seen by readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl From<ThemeMode> for ThemeState {
    fn from(mode: ThemeMode) -> Self {
        Self {
            dark_mode: mode.is_dark(),
        }
    }
}
