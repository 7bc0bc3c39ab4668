//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions following Elm architecture:
//! every change to the query recomputes the visible list from scratch.

use crate::i18n::Locale;
use crate::model::{QueryState, Repository, SortKey};
use crate::query::QueryEngine;
use crate::state::SearchState;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Invariant
///
/// `visible` always equals `engine.view_indices(&query)`. The query is only
/// reachable through methods that recompute it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable dataset plus precomputed language facet.
    engine: QueryEngine,

    /// Committed query driving the list.
    query: QueryState,

    /// Dataset indices of the current view, filtered and sorted.
    visible: Vec<usize>,

    /// Selected row within `visible`. Meaningless when `visible` is empty.
    selected: usize,

    /// Search draft editor state.
    pub search: SearchState,

    /// Active display locale.
    pub locale: Locale,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over `engine` with an initial query.
    pub fn new(engine: QueryEngine, query: QueryState, locale: Locale) -> Self {
        let visible = engine.view_indices(&query);
        Self {
            engine,
            query,
            visible,
            selected: 0,
            search: SearchState::Idle,
            locale,
            help_visible: false,
        }
    }

    /// The query engine (full dataset and facet).
    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// The committed query.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Dataset indices of the visible records, in display order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Visible records, in display order.
    pub fn visible_records(&self) -> impl Iterator<Item = &Repository> + '_ {
        self.visible
            .iter()
            .filter_map(move |&idx| self.engine.get(idx))
    }

    /// Number of visible records.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Selected row in the visible list, or `None` when the list is empty.
    pub fn selected(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    /// The selected record.
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.selected()
            .and_then(|row| self.visible.get(row))
            .and_then(|&idx| self.engine.get(idx))
    }

    // ===== Query transitions =====

    /// Replace the query and recompute the view. Selection returns to the top.
    pub fn set_query(&mut self, query: QueryState) {
        self.query = query;
        self.recompute();
    }

    /// Commit a new search string.
    pub fn commit_search(&mut self, search: impl Into<String>) {
        let query = self.query.clone().with_search(search);
        self.set_query(query);
    }

    /// Set the language filter (empty for all languages).
    pub fn set_language(&mut self, language: impl Into<String>) {
        let query = self.query.clone().with_language(language);
        self.set_query(query);
    }

    /// Step forward through "all languages" followed by the facet.
    pub fn next_language(&mut self) {
        let options = self.language_options();
        let current = self.language_position(&options);
        let next = (current + 1) % options.len();
        self.set_language(options[next].clone());
    }

    /// Step backward through "all languages" followed by the facet.
    pub fn prev_language(&mut self) {
        let options = self.language_options();
        let current = self.language_position(&options);
        let prev = (current + options.len() - 1) % options.len();
        self.set_language(options[prev].clone());
    }

    /// Change the sort key, keeping the direction.
    pub fn set_sort_key(&mut self, key: SortKey) {
        let query = self.query.clone().sorted_by(key, self.query.sort_order);
        self.set_query(query);
    }

    /// Cycle the sort key forward.
    pub fn next_sort_key(&mut self) {
        self.set_sort_key(self.query.sort_by.next());
    }

    /// Cycle the sort key backward.
    pub fn prev_sort_key(&mut self) {
        self.set_sort_key(self.query.sort_by.prev());
    }

    /// Flip ascending/descending.
    pub fn toggle_sort_order(&mut self) {
        let query = self
            .query
            .clone()
            .sorted_by(self.query.sort_by, self.query.sort_order.toggle());
        self.set_query(query);
    }

    /// Drop search text, language and count ranges. Sorting is kept.
    pub fn clear_filters(&mut self) {
        let mut query = self.query.clone();
        query.clear_filters();
        self.search = SearchState::Idle;
        self.set_query(query);
    }

    // ===== Selection transitions =====

    /// Move selection down one row. Saturates at the last row.
    pub fn select_next(&mut self) {
        self.select_by(1);
    }

    /// Move selection up one row. Saturates at the first row.
    pub fn select_prev(&mut self) {
        self.select_by(-1);
    }

    /// Move selection down by `page` rows.
    pub fn page_down(&mut self, page: usize) {
        self.select_by(page.max(1) as isize);
    }

    /// Move selection up by `page` rows.
    pub fn page_up(&mut self, page: usize) {
        self.select_by(-(page.max(1) as isize));
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    // ===== Misc =====

    /// Switch to the other locale.
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    fn recompute(&mut self) {
        self.visible = self.engine.view_indices(&self.query);
        self.selected = 0;
    }

    fn select_by(&mut self, delta: isize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// `""` (all languages) followed by the facet.
    fn language_options(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.engine.languages().iter().cloned())
            .collect()
    }

    /// Position of the current language in `options`. A language outside
    /// the facet (e.g. from the command line) counts as "all languages".
    fn language_position(&self, options: &[String]) -> usize {
        options
            .iter()
            .position(|lang| *lang == self.query.selected_language)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
