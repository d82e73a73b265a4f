//! Tabbed process-flow viewer.

use std::ops::Range;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use qrfolio_engine::{ProcessCategory, ProcessFlowViewer, Step};
use qrfolio_types::content::{PROCESS_SUBTITLE, PROCESS_TITLE, PURPOSE_LABEL};

use crate::page::{PageWriter, RenderCtx};
use crate::theme::styles;

/// Column of the step connector, under the step number.
const CONNECTOR_INDENT: usize = 4;
/// Indent of step details, past the number column.
const DETAIL_INDENT: usize = 6;

/// Renders the tabs and the active category. Returns the line range of the
/// content below the tabs.
pub fn process_flow(
    out: &mut PageWriter,
    ctx: &RenderCtx,
    viewer: &ProcessFlowViewer,
) -> Range<usize> {
    let palette = &ctx.palette;
    out.heading(PROCESS_TITLE, Some(PROCESS_SUBTITLE));

    let tabs = viewer
        .tabs()
        .enumerate()
        .map(|(index, (process, active))| {
            let label = format!(" {} {} ", index + 1, process.subtitle);
            let style = if active {
                styles::badge(palette, process.accent, false)
            } else {
                Style::default().fg(palette.text_muted).bg(palette.bg_panel)
            };
            vec![Span::styled(label, style)]
        })
        .collect();
    out.flow(tabs, 2, 1);
    out.blank();

    let start = out.line_count();
    content(out, ctx, viewer.active_process());
    start..out.line_count()
}

fn content(out: &mut PageWriter, ctx: &RenderCtx, process: &ProcessCategory) {
    let palette = &ctx.palette;
    out.hanging(
        vec![Span::raw("  ")],
        process.title,
        styles::accent_bold(palette, process.accent),
    );
    out.hanging(
        vec![
            Span::raw("  "),
            Span::styled(format!("{PURPOSE_LABEL}: "), styles::muted(palette)),
        ],
        process.purpose,
        styles::body(palette),
    );
    out.blank();

    for (index, step) in process.steps.iter().enumerate() {
        step_row(out, ctx, index + 1, step);
        if index + 1 < process.steps.len() {
            out.push(Line::from(vec![
                Span::raw(" ".repeat(CONNECTOR_INDENT)),
                Span::styled(ctx.glyphs.connector, Style::default().fg(palette.border)),
            ]));
        }
    }
}

fn step_row(out: &mut PageWriter, ctx: &RenderCtx, number: usize, step: &Step) {
    let palette = &ctx.palette;
    let kind = step.kind;
    out.hanging(
        vec![
            Span::styled(
                format!("{number:>4}. "),
                styles::muted(palette).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", kind.label()),
                styles::badge(palette, kind.accent(), kind.dark_label()),
            ),
            Span::raw(" "),
        ],
        step.text,
        Style::default().fg(palette.text_primary),
    );
    if let Some(detail) = step.detail {
        out.text(detail, styles::code(palette), DETAIL_INDENT + 1);
    }
}
