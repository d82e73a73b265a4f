//! TUI rendering for qrfolio using ratatui.

mod effects;
mod input;
mod page;
mod sections;
mod theme;
mod wrap;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles, theme_glyph};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};
use unicode_width::UnicodeWidthStr;

use qrfolio_engine::{App, RevealPhase, Section};
use qrfolio_types::content::{NAV_ITEMS, SITE_NAME};

use self::effects::{apply_reveal, apply_slide};
use self::page::{Page, RenderCtx};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let mode = app.theme_mode();
    let palette = palette(mode, options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    // Body: one column of padding each side, one for the scrollbar.
    let body_width = chunks[1].width.saturating_sub(3);
    let ctx = RenderCtx::new(mode, palette, glyphs, body_width);

    draw_header(frame, chunks[0], &ctx);
    draw_page(frame, app, chunks[1], &ctx);
    draw_status_bar(frame, chunks[2], &ctx);

    if app.nav_open() {
        draw_nav_drawer(frame, chunks[1], &ctx);
    }
}

/// The whole page as plain text, wrapped to `width` columns.
///
/// No styling and no entrance effects: every section is shown.
#[must_use]
pub fn render_plain(app: &App, width: u16) -> String {
    let options = app.ui_options();
    let mode = app.theme_mode();
    let ctx = RenderCtx::new(mode, palette(mode, options), glyphs(options), width);
    page::build(app, &ctx).to_plain()
}

fn draw_header(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    let toggle = format!(" {} ", theme_glyph(ctx.mode, &ctx.glyphs));
    let toggle_width = u16::try_from(toggle.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(toggle_width)])
        .split(area);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(SITE_NAME, styles::logo(palette)),
        Span::raw("  "),
    ];
    for item in &NAV_ITEMS {
        spans.push(Span::styled(
            format!(" {} ", item.label),
            Style::default().fg(palette.text_secondary),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel));
    frame.render_widget(header, chunks[0]);

    let toggle = Paragraph::new(Span::styled(
        toggle,
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(toggle, chunks[1]);
}

fn draw_page(frame: &mut Frame, app: &mut App, area: Rect, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let page = page::build(app, ctx);
    app.update_viewport(inner.height, page.lines.len());
    if let Some(section) = app.take_pending_jump() {
        let offset = page.offset_of(section);
        tracing::debug!(?section, offset, "Jumping to section");
        app.scroll_to(offset);
    }

    let offset = usize::from(app.scroll_offset());
    let visible_end = offset + usize::from(inner.height);
    let visible: Vec<_> = page.visible_sections(offset..visible_end).collect();
    for section in visible {
        app.mark_visible(section);
    }

    let lines = styled_lines(&page, app, palette);

    let end = visible_end.min(lines.len());
    let start = offset.min(end);
    let body = Paragraph::new(lines[start..end].to_vec())
        .block(block)
        .style(Style::default().bg(palette.bg));
    frame.render_widget(body, area);

    let max_scroll = page.lines.len().saturating_sub(usize::from(inner.height));
    // Only render scrollbar when content exceeds viewport
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(ctx.glyphs.arrow_up))
            .end_symbol(Some(ctx.glyphs.arrow_down))
            .track_symbol(Some(ctx.glyphs.track))
            .thumb_symbol(ctx.glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        // content_length = scrollable range (max_scroll), not total lines
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(offset);

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// Page lines with reveal and slide-in effects applied.
///
/// The tab slide-in waits until the process section has finished its own
/// entrance.
fn styled_lines(page: &Page, app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = page.lines.clone();
    if app.reveal_phase(Section::Process) == RevealPhase::Shown {
        let content = page.process_content.clone();
        apply_slide(&mut lines[content], app.process_effect_phase());
    }
    for section in Section::ALL {
        let range = page.section_range(section);
        apply_reveal(&mut lines[range], app.reveal_phase(section), palette);
    }
    lines
}

fn draw_status_bar(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    let hints = [
        ("t", "theme"),
        ("1-4", "process"),
        ("←/→", "tabs"),
        ("j/k", "scroll"),
        ("m", "menu"),
        ("q", "quit"),
    ];

    let mut spans = vec![Span::styled(
        format!(" {} ", ctx.mode.as_str()),
        Style::default()
            .fg(palette.bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, action) in hints {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg));
    frame.render_widget(status, area);
}

fn draw_nav_drawer(frame: &mut Frame, body: Rect, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    let label_width = NAV_ITEMS
        .iter()
        .map(|item| item.label.width())
        .max()
        .unwrap_or(0);
    // "▸ 1. " prefix plus borders and padding.
    let width = u16::try_from(label_width + 9)
        .unwrap_or(u16::MAX)
        .min(body.width);
    let height = u16::try_from(NAV_ITEMS.len() + 2)
        .unwrap_or(u16::MAX)
        .min(body.height);
    let area = Rect {
        x: body.x + body.width.saturating_sub(width),
        y: body.y,
        width,
        height,
    };

    let lines: Vec<Line> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Line::from(vec![
                Span::styled(ctx.glyphs.selected, Style::default().fg(palette.accent)),
                Span::styled(format!(" {}. ", index + 1), styles::key_highlight(palette)),
                Span::styled(item.label, Style::default().fg(palette.text_primary)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(" Menu ")
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_highlight));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
