//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, search box, control
//! bar, repository list and footer, and draws each from `AppState`.

use crate::i18n::{copyright, t, Locale};
use crate::model::CountRange;
use crate::state::AppState;
use crate::view::constants::{
    CONTROLS_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, ROW_HEIGHT, SEARCH_INPUT_HEIGHT,
};
use crate::view::helpers::format_count;
use crate::view::styles::ListStyles;
use crate::view::{help, repo_list, SearchInput};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title and tagline.
    pub header: Rect,
    /// Search box.
    pub search: Rect,
    /// Language / sort / order bar.
    pub controls: Rect,
    /// Repository list, borders included.
    pub list: Rect,
    /// Key hints and copyright.
    pub footer: Rect,
}

/// Split `area` into the screen regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        controls: chunks[2],
        list: chunks[3],
        footer: chunks[4],
    }
}

/// Number of whole records that fit in the list for a frame of `area`.
///
/// Never less than 1, so paging always moves.
pub fn page_size(area: Rect) -> usize {
    let inner = calculate_areas(area).list.height.saturating_sub(2);
    usize::from((inner / ROW_HEIGHT).max(1))
}

/// Render the full screen, using the local clock for the copyright year.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ListStyles) {
    let year = chrono::Local::now().year();
    render_layout_at(frame, state, styles, year);
}

/// Render the full screen with an explicit copyright year.
pub fn render_layout_at(frame: &mut Frame, state: &AppState, styles: &ListStyles, year: i32) {
    let areas = calculate_areas(frame.area());

    render_header(frame, areas.header, state, styles);
    frame.render_widget(
        SearchInput::new(
            &state.search,
            &state.query().search_query,
            state.locale,
            styles,
        ),
        areas.search,
    );
    render_controls(frame, areas.controls, state, styles);
    repo_list::render_repo_list(frame, areas.list, state, styles);
    render_footer(frame, areas.footer, state, styles, year);

    if state.help_visible {
        help::render_help_overlay(frame, state.locale, styles);
    }
}

/// Title line with the locale switch hint, then the tagline.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let locale = state.locale;
    let lines = vec![
        Line::from(vec![
            Span::styled(t(locale, "title"), styles.title),
            Span::styled(format!("  [t] {}", t(locale, "switchLanguage")), styles.muted),
        ]),
        Line::from(Span::styled(t(locale, "description"), styles.muted)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Language facet, sort key, sort order and any count bounds.
fn render_controls(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let locale = state.locale;
    let query = state.query();

    let language = if query.selected_language.is_empty() {
        t(locale, "allLanguages")
    } else {
        query.selected_language.as_str()
    };

    let mut spans = vec![
        Span::styled(format!(" {}: ", t(locale, "tui.language")), styles.muted),
        Span::styled(language, styles.control_value),
        Span::styled(format!("  │  {}: ", t(locale, "tui.sortBy")), styles.muted),
        Span::styled(t(locale, query.sort_by.label_key()), styles.control_value),
        Span::styled(format!("  │  {}: ", t(locale, "tui.order")), styles.muted),
        Span::styled(t(locale, query.sort_order.label_key()), styles.control_value),
    ];

    let bounds = [
        ("filters.minStars", "filters.maxStars", query.stars),
        ("filters.minForks", "filters.maxForks", query.forks),
    ];
    for (min_key, max_key, range) in bounds {
        spans.extend(range_spans(locale, min_key, max_key, range, styles));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn range_spans(
    locale: Locale,
    min_key: &'static str,
    max_key: &'static str,
    range: CountRange,
    styles: &ListStyles,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (key, bound) in [(min_key, range.min), (max_key, range.max)] {
        if let Some(value) = bound {
            spans.push(Span::styled(format!("  │  {}: ", t(locale, key)), styles.muted));
            spans.push(Span::styled(format_count(value), styles.control_value));
        }
    }
    spans
}

/// Key hints, then the copyright line.
fn render_footer(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &ListStyles,
    year: i32,
) {
    let lines = vec![
        Line::from(Span::styled(t(state.locale, "tui.hint"), styles.muted)),
        Line::from(Span::styled(copyright(state.locale, year), styles.muted)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
