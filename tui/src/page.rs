//! The scrollable page: every section pre-rendered to one line per row.

use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use qrfolio_engine::{App, Section, ThemeMode};

use crate::sections;
use crate::theme::{Glyphs, Palette, styles};
use crate::wrap::{center_pad, wrap};

/// Narrowest body the layout will wrap to.
const MIN_WIDTH: usize = 20;

/// Everything a section needs to render. Passed explicitly to every
/// section so none of them looks the theme up on its own.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub width: usize,
}

impl RenderCtx {
    #[must_use]
    pub fn new(mode: ThemeMode, palette: Palette, glyphs: Glyphs, width: u16) -> Self {
        Self {
            mode,
            palette,
            glyphs,
            width: usize::from(width).max(MIN_WIDTH),
        }
    }
}

/// Rendered page with the line range of each section.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    sections: [Range<usize>; Section::ALL.len()],
    /// Process content below the tabs; slides in on tab switches.
    pub process_content: Range<usize>,
}

impl Page {
    #[must_use]
    pub fn section_range(&self, section: Section) -> Range<usize> {
        self.sections[section.index()].clone()
    }

    /// First line of `section`, as a scroll offset.
    #[must_use]
    pub fn offset_of(&self, section: Section) -> u16 {
        u16::try_from(self.sections[section.index()].start).unwrap_or(u16::MAX)
    }

    /// Sections with at least one line inside `rows`.
    pub fn visible_sections(&self, rows: Range<usize>) -> impl Iterator<Item = Section> + '_ {
        Section::ALL.into_iter().filter(move |section| {
            let range = &self.sections[section.index()];
            range.start < rows.end && rows.start < range.end
        })
    }

    /// Unstyled text, one row per line, trailing spaces trimmed.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Renders every section in page order.
#[must_use]
pub fn build(app: &App, ctx: &RenderCtx) -> Page {
    let mut out = PageWriter::new(ctx);
    let mut ranges: [Range<usize>; Section::ALL.len()] = Default::default();
    let mut process_content = 0..0;

    for section in Section::ALL {
        let start = out.line_count();
        match section {
            Section::Hero => sections::hero(&mut out, ctx),
            Section::TechStack => sections::tech_stack(&mut out, ctx),
            Section::Architecture => sections::architecture(&mut out, ctx),
            Section::Process => {
                process_content = sections::process_flow(&mut out, ctx, app.process_flow());
            }
            Section::Database => sections::database(&mut out, ctx),
            Section::Api => sections::api(&mut out, ctx),
            Section::Progress => sections::progress(&mut out, ctx),
            Section::Goals => sections::goals(&mut out, ctx),
            Section::Footer => sections::footer(&mut out, ctx),
        }
        ranges[section.index()] = start..out.line_count();
    }

    Page {
        lines: out.lines,
        sections: ranges,
        process_content,
    }
}

/// Line accumulator with wrapping helpers.
pub struct PageWriter<'a> {
    ctx: &'a RenderCtx,
    lines: Vec<Line<'static>>,
}

impl<'a> PageWriter<'a> {
    fn new(ctx: &'a RenderCtx) -> Self {
        Self {
            ctx,
            lines: Vec::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.ctx.width
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    /// Section title with optional subtitle, framed by blank lines.
    pub fn heading(&mut self, title: &str, subtitle: Option<&str>) {
        let ctx = self.ctx;
        let palette = &ctx.palette;
        self.blank();
        self.push(Line::from(vec![
            Span::styled(ctx.glyphs.chip, Style::default().fg(palette.accent)),
            Span::raw(" "),
            Span::styled(title.to_string(), styles::heading(palette)),
        ]));
        if let Some(subtitle) = subtitle {
            let style = styles::subheading(palette);
            self.text(subtitle, style, 2);
        }
        self.blank();
    }

    /// Wrapped paragraph, every row indented by `indent` columns.
    pub fn text(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for row in wrap(text, self.width().saturating_sub(indent)) {
            self.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(row, style),
            ]));
        }
    }

    /// `prefix` on the first row, `text` wrapped after it with a hanging
    /// indent of the prefix width.
    pub fn hanging(&mut self, prefix: Vec<Span<'static>>, text: &str, style: Style) {
        let indent: usize = prefix.iter().map(|span| span.content.width()).sum();
        let rows = wrap(text, self.width().saturating_sub(indent));
        let mut rows = rows.into_iter();
        let mut first = prefix;
        if let Some(row) = rows.next() {
            first.push(Span::styled(row, style));
        }
        self.push(Line::from(first));
        let pad = " ".repeat(indent);
        for row in rows {
            self.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(row, style),
            ]));
        }
    }

    /// Wrapped text with each row centered.
    pub fn centered_text(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width()) {
            self.centered(vec![Span::styled(row, style)]);
        }
    }

    /// One row of spans, centered.
    pub fn centered(&mut self, mut spans: Vec<Span<'static>>) {
        let content: usize = spans.iter().map(|span| span.content.width()).sum();
        let pad = center_pad(content, self.width());
        if pad > 0 {
            spans.insert(0, Span::raw(" ".repeat(pad)));
        }
        self.push(Line::from(spans));
    }

    /// Packs `items` left to right, `gap` columns apart, starting new rows
    /// at `indent` when the width runs out.
    pub fn flow(&mut self, items: Vec<Vec<Span<'static>>>, indent: usize, gap: usize) {
        let width = self.width();
        let mut row: Vec<Span<'static>> = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;
        let mut row_has_items = false;

        for item in items {
            let item_width: usize = item.iter().map(|span| span.content.width()).sum();
            if row_has_items && used + gap + item_width > width {
                self.push(Line::from(std::mem::take(&mut row)));
                row.push(Span::raw(" ".repeat(indent)));
                used = indent;
                row_has_items = false;
            }
            if row_has_items {
                row.push(Span::raw(" ".repeat(gap)));
                used += gap;
            }
            used += item_width;
            row.extend(item);
            row_has_items = true;
        }

        if row_has_items {
            self.push(Line::from(row));
        }
    }

    /// Horizontal rule across the full width.
    pub fn rule(&mut self) {
        let rule = self.ctx.glyphs.rule.repeat(self.width() / self.ctx.glyphs.rule.width());
        self.push(Line::from(Span::styled(
            rule,
            Style::default().fg(self.ctx.palette.border),
        )));
    }
}
