//! Call to action, project links and copyright.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use qrfolio_types::content::{
    ABOUT_LINES, BUILT_WITH, COPYRIGHT, CTA_BUTTON, CTA_LINES, CTA_TITLE, Link, PROJECT_LINKS,
    PROJECT_LINKS_TITLE, SITE_NAME, SOCIAL_LINKS, SOCIAL_LINKS_TITLE,
};

use crate::page::{PageWriter, RenderCtx};
use crate::theme::styles;

pub fn footer(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;

    out.blank();
    out.rule();
    out.blank();
    out.centered_text(CTA_TITLE, styles::heading(palette));
    for line in CTA_LINES {
        out.centered_text(line, styles::body(palette));
    }
    out.blank();
    out.centered(vec![Span::styled(
        format!(" {} ", CTA_BUTTON.label),
        Style::default()
            .fg(palette.bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )]);
    out.centered_text(CTA_BUTTON.href, styles::muted(palette));
    out.blank();

    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(SITE_NAME, styles::logo(palette)),
    ]));
    for line in ABOUT_LINES {
        out.text(line, styles::muted(palette), 2);
    }
    out.blank();

    link_list(out, ctx, PROJECT_LINKS_TITLE, &PROJECT_LINKS);
    link_list(out, ctx, SOCIAL_LINKS_TITLE, &SOCIAL_LINKS);

    out.rule();
    out.centered_text(COPYRIGHT, styles::muted(palette));
    out.centered_text(BUILT_WITH, styles::muted(palette));
    out.blank();
}

fn link_list(out: &mut PageWriter, ctx: &RenderCtx, title: &str, links: &[Link]) {
    let palette = &ctx.palette;
    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(title.to_string(), styles::heading(palette)),
    ]));
    for link in links {
        let label = if link.href == "#" {
            link.label.to_string()
        } else {
            format!("{} {} {}", link.label, ctx.glyphs.link, link.href)
        };
        out.hanging(
            vec![
                Span::raw("    "),
                Span::styled(ctx.glyphs.bullet, Style::default().fg(palette.accent)),
                Span::raw(" "),
            ],
            &label,
            styles::body(palette),
        );
    }
    out.blank();
}
