//! Progress report, infrastructure and project goals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use qrfolio_types::content::{
    COMPLETED, COMPLETED_TITLE, EFFECTS_TITLE, EXPECTED_EFFECTS, GOALS, GOALS_SUBTITLE,
    GOALS_TITLE, INFRASTRUCTURE, INFRASTRUCTURE_TITLE, NEEDS_SETUP, NEEDS_SETUP_TITLE,
    NOT_IMPLEMENTED, NOT_IMPLEMENTED_TITLE, OVERALL_PROGRESS_LABEL, PROGRESS_SUBTITLE,
    PROGRESS_TITLE, ProgressSummary,
};

use crate::page::{PageWriter, RenderCtx};
use crate::theme::styles;

const MAX_BAR_WIDTH: usize = 48;

pub fn progress(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    let glyphs = &ctx.glyphs;
    let summary = ProgressSummary::current();
    out.heading(PROGRESS_TITLE, Some(PROGRESS_SUBTITLE));

    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(OVERALL_PROGRESS_LABEL, styles::heading(palette)),
        Span::raw("  "),
        Span::styled(
            format!("{} / {} 완료", summary.done(), summary.total()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let bar_width = out.width().saturating_sub(4).min(MAX_BAR_WIDTH);
    let (completed, setup) = bar_split(summary, bar_width);
    let rest = bar_width - completed - setup;
    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            glyphs.bar_full.repeat(completed),
            Style::default().fg(palette.success),
        ),
        Span::styled(
            glyphs.bar_full.repeat(setup),
            Style::default().fg(palette.warning),
        ),
        Span::styled(
            glyphs.bar_empty.repeat(rest),
            Style::default().fg(palette.text_muted),
        ),
    ]));
    let legend = vec![
        legend_item(
            glyphs.bar_full,
            palette.success,
            format!("완료 ({}%)", summary.completed_percent()),
            palette.text_secondary,
        ),
        legend_item(
            glyphs.bar_full,
            palette.warning,
            format!("{NEEDS_SETUP_TITLE} ({}%)", summary.setup_percent()),
            palette.text_secondary,
        ),
        legend_item(
            glyphs.bar_empty,
            palette.text_muted,
            NOT_IMPLEMENTED_TITLE.to_string(),
            palette.text_secondary,
        ),
    ];
    out.flow(legend, 2, 3);
    out.blank();

    status_group(out, ctx, COMPLETED_TITLE, &COMPLETED, glyphs.check, palette.success);
    status_group(out, ctx, NEEDS_SETUP_TITLE, &NEEDS_SETUP, glyphs.pending, palette.warning);
    status_group(
        out,
        ctx,
        NOT_IMPLEMENTED_TITLE,
        &NOT_IMPLEMENTED,
        glyphs.cross,
        palette.text_muted,
    );

    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(INFRASTRUCTURE_TITLE, styles::heading(palette)),
    ]));
    for infra in &INFRASTRUCTURE {
        out.hanging(
            vec![
                Span::raw("    "),
                Span::styled(format!("{}: ", infra.label), styles::muted(palette)),
            ],
            infra.value,
            Style::default().fg(palette.text_primary),
        );
    }
}

fn status_group(
    out: &mut PageWriter,
    ctx: &RenderCtx,
    title: &str,
    items: &[&str],
    icon: &'static str,
    color: Color,
) {
    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{title} ({})", items.len()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));
    for item in items {
        out.hanging(
            vec![
                Span::raw("    "),
                Span::styled(icon, Style::default().fg(color)),
                Span::raw(" "),
            ],
            item,
            styles::body(&ctx.palette),
        );
    }
    out.blank();
}

fn legend_item(
    glyph: &'static str,
    swatch: Color,
    label: String,
    fg: Color,
) -> Vec<Span<'static>> {
    vec![
        Span::styled(glyph, Style::default().fg(swatch)),
        Span::styled(format!(" {label}"), Style::default().fg(fg)),
    ]
}

/// Cells of a `width`-cell bar for completed and needs-setup work.
fn bar_split(summary: ProgressSummary, width: usize) -> (usize, usize) {
    let cells = |percent: u8| (usize::from(percent) * width + 50) / 100;
    let completed = cells(summary.completed_percent()).min(width);
    let setup = cells(summary.setup_percent()).min(width - completed);
    (completed, setup)
}

pub fn goals(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    out.heading(GOALS_TITLE, Some(GOALS_SUBTITLE));

    for goal in &GOALS {
        out.hanging(
            vec![
                Span::raw("  "),
                Span::styled(ctx.glyphs.chip, styles::accent(palette, goal.accent)),
                Span::raw(" "),
            ],
            goal.title,
            styles::accent_bold(palette, goal.accent),
        );
        out.text(goal.description, styles::body(palette), 4);
    }
    out.blank();

    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(EFFECTS_TITLE, styles::heading(palette)),
    ]));
    for (index, effect) in EXPECTED_EFFECTS.iter().enumerate() {
        out.hanging(
            vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:>2}. ", index + 1),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ],
            effect,
            styles::body(palette),
        );
    }
}

#[cfg(test)]
mod tests {
    use qrfolio_types::content::ProgressSummary;

    use super::bar_split;

    #[test]
    fn bar_matches_percentages() {
        let summary = ProgressSummary::current();
        assert_eq!(bar_split(summary, 100), (50, 29));
        let (completed, setup) = bar_split(summary, 10);
        assert_eq!((completed, setup), (5, 3));
    }

    #[test]
    fn bar_never_overflows() {
        let summary = ProgressSummary {
            completed: 1,
            needs_setup: 1,
            not_implemented: 0,
        };
        for width in 0..20 {
            let (completed, setup) = bar_split(summary, width);
            assert!(completed + setup <= width);
        }
    }
}
