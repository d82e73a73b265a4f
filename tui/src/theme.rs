//! Color palettes and glyphs for the portfolio TUI.
//!
//! Dark mode uses a slate base with 400-weight accents; light mode uses a
//! gray base with 600-weight accents so they stay readable on white.
//! A high-contrast override swaps both for named terminal colors.

use ratatui::style::{Color, Modifier, Style};

use qrfolio_types::Accent;
use qrfolio_types::ThemeMode;
use qrfolio_types::ui::UiOptions;

/// Palette color constants.
mod colors {
    use super::Color;

    // === Neutrals ===
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY_50: Color = Color::Rgb(249, 250, 251);
    pub const GRAY_300: Color = Color::Rgb(209, 213, 219);
    pub const GRAY_400: Color = Color::Rgb(156, 163, 175);
    pub const SLATE_100: Color = Color::Rgb(241, 245, 249);
    pub const SLATE_200: Color = Color::Rgb(226, 232, 240);
    pub const SLATE_500: Color = Color::Rgb(100, 116, 139);
    pub const SLATE_600: Color = Color::Rgb(71, 85, 105);
    pub const SLATE_700: Color = Color::Rgb(51, 65, 85);
    pub const SLATE_800: Color = Color::Rgb(30, 41, 59);
    pub const SLATE_900: Color = Color::Rgb(15, 23, 42);

    // === Accents (dark mode, 400 weight) ===
    pub const DARK_ACCENTS: [Color; 13] = [
        Color::Rgb(167, 139, 250), // violet
        Color::Rgb(52, 211, 153),  // emerald
        Color::Rgb(244, 114, 182), // pink
        Color::Rgb(34, 211, 238),  // cyan
        Color::Rgb(251, 146, 60),  // orange
        Color::Rgb(251, 113, 133), // rose
        Color::Rgb(96, 165, 250),  // blue
        Color::Rgb(74, 222, 128),  // green
        Color::Rgb(156, 163, 175), // gray
        Color::Rgb(250, 204, 21),  // yellow
        Color::Rgb(192, 132, 252), // purple
        Color::Rgb(251, 191, 36),  // amber
        Color::Rgb(148, 163, 184), // slate
    ];

    // === Accents (light mode, 600 weight) ===
    pub const LIGHT_ACCENTS: [Color; 13] = [
        Color::Rgb(124, 58, 237), // violet
        Color::Rgb(5, 150, 105),  // emerald
        Color::Rgb(219, 39, 119), // pink
        Color::Rgb(8, 145, 178),  // cyan
        Color::Rgb(234, 88, 12),  // orange
        Color::Rgb(225, 29, 72),  // rose
        Color::Rgb(37, 99, 235),  // blue
        Color::Rgb(22, 163, 74),  // green
        Color::Rgb(75, 85, 99),   // gray
        Color::Rgb(202, 138, 4),  // yellow
        Color::Rgb(147, 51, 234), // purple
        Color::Rgb(217, 119, 6),  // amber
        Color::Rgb(71, 85, 105),  // slate
    ];

    pub const CONTRAST_ACCENTS: [Color; 13] = [
        Color::Magenta,
        Color::Green,
        Color::LightMagenta,
        Color::Cyan,
        Color::Yellow,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Gray,
        Color::Yellow,
        Color::Magenta,
        Color::Yellow,
        Color::Gray,
    ];
}

/// Resolved theme palette used by every section renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub code: Color,
    pub success: Color,
    pub warning: Color,
    pub badge_text: Color,
    pub badge_text_dark: Color,
    accents: [Color; 13],
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: colors::SLATE_900,
            bg_panel: colors::SLATE_800,
            bg_highlight: colors::SLATE_700,
            border: colors::SLATE_700,
            text_primary: colors::WHITE,
            text_secondary: colors::GRAY_300,
            text_muted: colors::GRAY_400,
            accent: colors::DARK_ACCENTS[Accent::Cyan as usize],
            code: colors::DARK_ACCENTS[Accent::Emerald as usize],
            success: colors::DARK_ACCENTS[Accent::Green as usize],
            warning: colors::DARK_ACCENTS[Accent::Yellow as usize],
            badge_text: colors::WHITE,
            badge_text_dark: colors::SLATE_900,
            accents: colors::DARK_ACCENTS,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: colors::GRAY_50,
            bg_panel: colors::SLATE_100,
            bg_highlight: colors::SLATE_200,
            border: colors::SLATE_200,
            text_primary: colors::SLATE_900,
            text_secondary: colors::SLATE_600,
            text_muted: colors::SLATE_500,
            accent: colors::LIGHT_ACCENTS[Accent::Cyan as usize],
            code: colors::LIGHT_ACCENTS[Accent::Emerald as usize],
            success: colors::LIGHT_ACCENTS[Accent::Green as usize],
            warning: colors::LIGHT_ACCENTS[Accent::Yellow as usize],
            badge_text: colors::WHITE,
            badge_text_dark: colors::SLATE_900,
            accents: colors::LIGHT_ACCENTS,
        }
    }

    #[must_use]
    pub fn high_contrast(mode: ThemeMode) -> Self {
        let (bg, fg) = if mode.is_dark() {
            (Color::Black, Color::White)
        } else {
            (Color::White, Color::Black)
        };
        Self {
            bg,
            bg_panel: bg,
            bg_highlight: Color::DarkGray,
            border: fg,
            text_primary: fg,
            text_secondary: fg,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            code: Color::Green,
            success: Color::Green,
            warning: Color::Yellow,
            badge_text: Color::White,
            badge_text_dark: Color::Black,
            accents: colors::CONTRAST_ACCENTS,
        }
    }

    /// Concrete color for a content accent role.
    #[must_use]
    pub fn accent_color(&self, accent: Accent) -> Color {
        self.accents[accent as usize]
    }
}

/// Palette for the current theme. Sections receive this; they never read
/// the theme themselves.
#[must_use]
pub fn palette(mode: ThemeMode, options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast(mode)
    } else if mode.is_dark() {
        Palette::dark()
    } else {
        Palette::light()
    }
}

/// ASCII/Unicode glyphs for icons and connectors.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub chip: &'static str,
    pub check: &'static str,
    pub pending: &'static str,
    pub cross: &'static str,
    pub flow_down: &'static str,
    pub flow_both: &'static str,
    pub connector: &'static str,
    pub rule: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub selected: &'static str,
    pub sun: &'static str,
    pub moon: &'static str,
    pub link: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            chip: "#",
            check: "v",
            pending: "!",
            cross: "x",
            flow_down: "v",
            flow_both: "^v",
            connector: "|",
            rule: "-",
            bar_full: "#",
            bar_empty: ".",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            selected: ">",
            sun: "(*)",
            moon: "(C)",
            link: "->",
        }
    } else {
        Glyphs {
            bullet: "•",
            chip: "■",
            check: "✓",
            pending: "◔",
            cross: "✗",
            flow_down: "↓",
            flow_both: "⇅",
            connector: "│",
            rule: "─",
            bar_full: "█",
            bar_empty: "░",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            selected: "▸",
            sun: "☀",
            moon: "☾",
            link: "→",
        }
    }
}

/// Toggle glyph for the header: the sun offers light mode, the moon dark.
#[must_use]
pub fn theme_glyph(mode: ThemeMode, glyphs: &Glyphs) -> &'static str {
    if mode.is_dark() {
        glyphs.sun
    } else {
        glyphs.moon
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Accent, Modifier, Palette, Style};

    #[must_use]
    pub fn logo(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subheading(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn code(palette: &Palette) -> Style {
        Style::default().fg(palette.code).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn accent(palette: &Palette, accent: Accent) -> Style {
        Style::default().fg(palette.accent_color(accent))
    }

    #[must_use]
    pub fn accent_bold(palette: &Palette, role: Accent) -> Style {
        accent(palette, role).add_modifier(Modifier::BOLD)
    }

    /// Filled label: accent background with light or dark text.
    #[must_use]
    pub fn badge(palette: &Palette, accent: Accent, dark_text: bool) -> Style {
        let fg = if dark_text {
            palette.badge_text_dark
        } else {
            palette.badge_text
        };
        Style::default()
            .fg(fg)
            .bg(palette.accent_color(accent))
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
