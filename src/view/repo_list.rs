//! Repository list rendering.
//!
//! Each record becomes a three-line list item. Name and description are
//! split into highlight fragments for the committed search; the selection is
//! tracked by ratatui's `ListState`, rebuilt every frame from `AppState`.

use crate::i18n::{t, Locale};
use crate::model::Repository;
use crate::query::{highlight_folded, FoldedQuery};
use crate::state::AppState;
use crate::view::helpers::format_count;
use crate::view::styles::ListStyles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Split `text` into styled spans, `matched` on search hits and `base`
/// elsewhere.
pub fn highlighted_spans<'a>(
    text: &'a str,
    needle: &FoldedQuery,
    base: Style,
    matched: Style,
) -> Vec<Span<'a>> {
    highlight_folded(text, needle)
        .into_iter()
        .map(|fragment| {
            let style = if fragment.is_matched() { matched } else { base };
            Span::styled(fragment.text, style)
        })
        .collect()
}

/// Build the list item for one repository.
pub fn repo_item<'a>(
    repo: &'a Repository,
    needle: &FoldedQuery,
    locale: Locale,
    styles: &ListStyles,
) -> ListItem<'a> {
    let mut header = highlighted_spans(&repo.name, needle, styles.name, styles.matched);
    if let Some(language) = repo.language() {
        header.push(Span::raw("  "));
        header.push(Span::styled(format!("[{}]", language), styles.language));
    }
    header.push(Span::raw("  "));
    header.push(Span::styled(
        format!(
            "{} {}  {} {}",
            t(locale, "sortOptions.stars"),
            format_count(repo.stars),
            t(locale, "sortOptions.forks"),
            format_count(repo.forks)
        ),
        styles.counts,
    ));

    let description = repo.description_or(t(locale, "noDescription"));
    let mut body = vec![Span::raw("  ")];
    body.extend(highlighted_spans(
        description,
        needle,
        Style::default(),
        styles.matched,
    ));

    let footer = vec![
        Span::raw("  "),
        Span::styled(repo.url.as_str(), styles.url),
        Span::styled(
            format!(
                "  {} {} · {} {}",
                t(locale, "tui.created"),
                repo.created_at.date_label(),
                t(locale, "tui.updated"),
                repo.updated_at.date_label()
            ),
            styles.muted,
        ),
    ];

    ListItem::new(vec![Line::from(header), Line::from(body), Line::from(footer)])
}

/// Render the visible records, or the empty-result message.
pub fn render_repo_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let locale = state.locale;
    let block = Block::default().borders(Borders::ALL).title(format!(
        " {} {} ",
        format_count(state.visible_len() as u64),
        t(locale, "reposFound")
    ));

    if state.visible_len() == 0 {
        let message = Paragraph::new(Line::from(Span::styled(
            t(locale, "tui.noResults"),
            styles.muted,
        )))
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let needle = FoldedQuery::new(&state.query().search_query);
    let items: Vec<ListItem> = state
        .visible_records()
        .map(|repo| repo_item(repo, &needle, locale, styles))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles.selected)
        .highlight_symbol("▌ ");

    let mut list_state = ListState::default().with_selected(state.selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}
