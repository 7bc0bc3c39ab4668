//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::ListStyles;
use crate::i18n::{t, Locale};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: category label key, then (keys, description label key) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "tui.help.navigation",
        &[
            ("j/↓", "tui.help.moveDown"),
            ("k/↑", "tui.help.moveUp"),
            ("Ctrl+d/PgDn", "tui.help.pageDown"),
            ("Ctrl+u/PgUp", "tui.help.pageUp"),
            ("g/Home", "tui.help.top"),
            ("G/End", "tui.help.bottom"),
        ],
    ),
    (
        "tui.help.filters",
        &[
            ("/", "tui.help.search"),
            ("l", "tui.help.nextLanguage"),
            ("L", "tui.help.prevLanguage"),
            ("c", "tui.help.clear"),
        ],
    ),
    (
        "tui.help.sorting",
        &[
            ("s", "tui.help.nextSort"),
            ("S", "tui.help.prevSort"),
            ("o", "tui.help.toggleOrder"),
        ],
    ),
    (
        "tui.help.application",
        &[
            ("t", "tui.help.toggleLocale"),
            ("?", "tui.help.help"),
            ("q/Ctrl+c", "tui.help.quit"),
        ],
    ),
];

/// Width of the key column, in cells.
const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, locale: Locale, styles: &ListStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(locale, styles))
        .block(
            Block::default()
                .title(t(locale, "tui.help.title"))
                .borders(Borders::ALL)
                .border_style(styles.focus_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        t(locale, "tui.help.close"),
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(locale: Locale, styles: &ListStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (category, rows)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(
            t(locale, *category),
            styles.section_header,
        )));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", keys, width = KEY_COLUMN_WIDTH), styles.key),
                Span::raw(t(locale, *description)),
            ]));
        }
    }

    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
