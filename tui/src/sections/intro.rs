//! Hero banner, tech stack strip and architecture overview.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use qrfolio_types::Accent;
use qrfolio_types::content::{
    ARCHITECTURE, ARCHITECTURE_SUBTITLE, ARCHITECTURE_TITLE, HERO, TECH_STACK_TITLE,
    TECHNOLOGIES, architecture_link_is_bidirectional,
};

use crate::page::{PageWriter, RenderCtx};
use crate::theme::styles;

pub fn hero(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;

    out.blank();
    out.centered(vec![Span::styled(
        format!(" {} ", HERO.badge),
        styles::badge(palette, Accent::Cyan, true),
    )]);
    out.blank();
    out.centered_text(HERO.title, styles::heading(palette));
    out.centered_text(HERO.title_emphasis, styles::logo(palette));
    out.blank();
    for line in HERO.subtitle {
        out.centered_text(line, styles::body(palette));
    }
    out.blank();
    let chip = |text: &str| {
        vec![
            Span::styled(ctx.glyphs.bullet, Style::default().fg(palette.accent)),
            Span::styled(format!(" {text}"), styles::muted(palette)),
        ]
    };
    let (period, affiliation) = (chip(HERO.period), chip(HERO.affiliation));
    let joined = Line::from(period.clone()).width() + 3 + Line::from(affiliation.clone()).width();
    if joined <= out.width() {
        let mut row = period;
        row.push(Span::raw("   "));
        row.extend(affiliation);
        out.centered(row);
    } else {
        out.centered(period);
        out.centered(affiliation);
    }
    out.blank();
}

pub fn tech_stack(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    out.heading(TECH_STACK_TITLE, None);
    let chips = TECHNOLOGIES
        .iter()
        .map(|tech| {
            vec![
                Span::styled(ctx.glyphs.chip, styles::accent(palette, tech.accent)),
                Span::styled(format!(" {}", tech.name), styles::body(palette)),
            ]
        })
        .collect();
    out.flow(chips, 2, 3);
}

pub fn architecture(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    out.heading(ARCHITECTURE_TITLE, Some(ARCHITECTURE_SUBTITLE));

    for (index, node) in ARCHITECTURE.iter().enumerate() {
        out.hanging(
            vec![
                Span::raw("  "),
                Span::styled(ctx.glyphs.chip, styles::accent(palette, node.accent)),
                Span::raw(" "),
            ],
            node.title,
            styles::accent_bold(palette, node.accent),
        );
        out.text(node.lines[0], styles::body(palette), 6);
        out.text(node.lines[1], styles::muted(palette), 6);

        if index + 1 < ARCHITECTURE.len() {
            let arrow = if architecture_link_is_bidirectional(index) {
                ctx.glyphs.flow_both
            } else {
                ctx.glyphs.flow_down
            };
            out.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(arrow, Style::default().fg(palette.text_muted)),
            ]));
        }
    }
}
