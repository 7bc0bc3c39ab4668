//! Search input widget for rendering the search bar.

use crate::i18n::{t, Locale};
use crate::state::SearchState;
use crate::view::styles::ListStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// While editing, shows the draft with a block cursor. Otherwise shows the
/// committed query, or the placeholder when nothing is committed.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    committed: &'a str,
    locale: Locale,
    styles: &'a ListStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(
        search_state: &'a SearchState,
        committed: &'a str,
        locale: Locale,
        styles: &'a ListStyles,
    ) -> Self {
        Self {
            search_state,
            committed,
            locale,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, line, border_style) = match self.search_state {
            SearchState::Editing { draft, cursor } => {
                let before: String = draft.chars().take(*cursor).collect();
                let mut after = draft.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let after_text: String = after.collect();

                let spans = vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default().add_modifier(Modifier::REVERSED),
                    ),
                    Span::raw(after_text),
                ];

                (
                    t(self.locale, "tui.searchEditing"),
                    Line::from(spans),
                    self.styles.focus_border,
                )
            }
            SearchState::Idle if self.committed.is_empty() => (
                t(self.locale, "tui.search"),
                Line::from(Span::styled(
                    t(self.locale, "searchPlaceholder"),
                    self.styles.muted,
                )),
                Style::default(),
            ),
            SearchState::Idle => (
                t(self.locale, "tui.search"),
                Line::from(Span::styled(self.committed, self.styles.matched)),
                Style::default(),
            ),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", title)),
            )
            .render(area, buf);
    }
}
