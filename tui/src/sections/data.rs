//! Data categories, database tables and the documented API surface.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use qrfolio_types::content::{
    API_CARD_TITLE, API_ENDPOINTS, API_SUBTITLE, API_TITLE, DATA_CATEGORIES, DATABASE_SUBTITLE,
    DATABASE_TABLES_TITLE, DATABASE_TITLE, DB_TABLES,
};

use crate::page::{PageWriter, RenderCtx};
use crate::theme::styles;

/// Table names wider than this wrap their description onto the next row.
const MAX_NAME_COLUMN: usize = 24;
/// Widest method label (`DELETE`).
const METHOD_COLUMN: usize = 6;

pub fn database(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    out.heading(DATABASE_TITLE, Some(DATABASE_SUBTITLE));

    for category in &DATA_CATEGORIES {
        out.hanging(
            vec![
                Span::raw("  "),
                Span::styled(ctx.glyphs.chip, styles::accent(palette, category.accent)),
                Span::raw(" "),
            ],
            category.title,
            styles::accent_bold(palette, category.accent),
        );
        let chips = category
            .items
            .iter()
            .map(|item| vec![Span::styled((*item).to_string(), styles::body(palette))])
            .collect();
        out.flow(chips, 4, 2);
        out.blank();
    }

    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(DATABASE_TABLES_TITLE, styles::heading(palette)),
    ]));
    let name_column = DB_TABLES
        .iter()
        .map(|table| table.name.width())
        .filter(|width| *width <= MAX_NAME_COLUMN)
        .max()
        .unwrap_or(0);

    for table in &DB_TABLES {
        let name = table.name;
        if name.width() <= name_column && 4 + name_column + 2 < out.width() / 2 {
            let padded = format!("{name}{}", " ".repeat(name_column - name.width()));
            out.hanging(
                vec![
                    Span::raw("    "),
                    Span::styled(padded, styles::code(palette)),
                    Span::raw("  "),
                ],
                table.description,
                styles::body(palette),
            );
        } else {
            out.text(name, styles::code(palette), 4);
            out.text(table.description, styles::body(palette), 6);
        }
    }
}

pub fn api(out: &mut PageWriter, ctx: &RenderCtx) {
    let palette = &ctx.palette;
    out.heading(API_TITLE, Some(API_SUBTITLE));
    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(API_CARD_TITLE, styles::heading(palette)),
    ]));

    for endpoint in &API_ENDPOINTS {
        let method = endpoint.method;
        out.hanging(
            vec![
                Span::raw("    "),
                Span::styled(
                    format!("{:<METHOD_COLUMN$}", method.as_str()),
                    styles::accent(palette, method.accent()).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ],
            endpoint.path,
            styles::code(palette),
        );
        out.text(
            endpoint.description,
            styles::muted(palette),
            4 + METHOD_COLUMN + 1,
        );
    }
}
