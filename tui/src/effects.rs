//! Entrance effects applied to pre-rendered page lines.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use qrfolio_engine::{AnimPhase, RevealPhase};

use crate::theme::Palette;

/// Columns a section travels while sliding in.
const SLIDE_COLUMNS: f32 = 6.0;
/// Eased progress below which entering text is dimmed.
const DIM_UNTIL: f32 = 0.6;

/// Styles a section's lines for its reveal phase.
///
/// Hidden sections keep their height but draw in the background color, so
/// layout and scroll offsets never shift when they appear.
pub fn apply_reveal(lines: &mut [Line<'static>], phase: RevealPhase, palette: &Palette) {
    match phase {
        RevealPhase::Hidden => {
            for line in lines {
                for span in &mut line.spans {
                    span.style = span.style.fg(palette.bg).bg(palette.bg);
                }
            }
        }
        RevealPhase::Entering { progress } => enter(lines, progress),
        RevealPhase::Shown => {}
    }
}

/// Slides the process content in after a tab switch.
pub fn apply_slide(lines: &mut [Line<'static>], phase: AnimPhase) {
    if let AnimPhase::Running { progress } = phase {
        enter(lines, progress);
    }
}

fn enter(lines: &mut [Line<'static>], progress: f32) {
    let t = ease_out_cubic(progress);
    let shift = slide_offset(t);
    for line in lines {
        if t < DIM_UNTIL {
            for span in &mut line.spans {
                span.style = span.style.add_modifier(Modifier::DIM);
            }
        }
        if shift > 0 {
            line.spans.insert(0, Span::raw(" ".repeat(shift)));
        }
    }
}

fn slide_offset(eased: f32) -> usize {
    ((1.0 - eased.clamp(0.0, 1.0)) * SLIDE_COLUMNS).round() as usize
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};

    use qrfolio_engine::{AnimPhase, RevealPhase};

    use super::{apply_reveal, apply_slide, ease_out_cubic, slide_offset};
    use crate::theme::Palette;

    fn sample() -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::styled("title", Style::default().fg(Palette::dark().text_primary)),
            Span::raw(" tail"),
        ])]
    }

    #[test]
    fn easing_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5, "ease-out front-loads motion");
    }

    #[test]
    fn slide_shrinks_to_zero() {
        assert_eq!(slide_offset(0.0), 6);
        assert_eq!(slide_offset(1.0), 0);
        assert!(slide_offset(0.5) < slide_offset(0.1));
    }

    #[test]
    fn hidden_lines_blend_into_background() {
        let palette = Palette::dark();
        let mut lines = sample();
        apply_reveal(&mut lines, RevealPhase::Hidden, &palette);
        for span in &lines[0].spans {
            assert_eq!(span.style.fg, Some(palette.bg));
            assert_eq!(span.style.bg, Some(palette.bg));
        }
        assert_eq!(lines[0].width(), "title tail".len());
    }

    #[test]
    fn entering_lines_are_shifted_and_dimmed() {
        let palette = Palette::dark();
        let mut lines = sample();
        apply_reveal(&mut lines, RevealPhase::Entering { progress: 0.0 }, &palette);
        assert_eq!(lines[0].spans[0].content, "      ");
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn shown_lines_are_untouched() {
        let palette = Palette::light();
        let mut lines = sample();
        apply_reveal(&mut lines, RevealPhase::Shown, &palette);
        assert_eq!(lines, sample());
    }

    #[test]
    fn completed_slide_is_a_no_op() {
        let mut lines = sample();
        apply_slide(&mut lines, AnimPhase::Completed);
        assert_eq!(lines, sample());
    }
}
