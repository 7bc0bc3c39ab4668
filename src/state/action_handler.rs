//! Keyboard action dispatch (pure).
//!
//! Maps a domain `KeyAction` onto an `AppState` transition. Quitting is the
//! event loop's concern and is a no-op here.

use crate::model::KeyAction;
use crate::state::search_input_handler::{activate_search_input, cancel_search, submit_search};
use crate::state::AppState;

/// Apply `action` to `state` in place.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The action to apply
/// * `page_size` - Rows per page for `PageUp`/`PageDown`
///
/// While the help overlay is open only `Help` (close) and `Quit` take
/// effect.
pub fn handle_action(state: &mut AppState, action: KeyAction, page_size: usize) {
    if state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
        return;
    }

    match action {
        KeyAction::SelectNext => state.select_next(),
        KeyAction::SelectPrev => state.select_prev(),
        KeyAction::PageDown => state.page_down(page_size),
        KeyAction::PageUp => state.page_up(page_size),
        KeyAction::SelectFirst => state.select_first(),
        KeyAction::SelectLast => state.select_last(),

        KeyAction::StartSearch => {
            let search = std::mem::take(&mut state.search);
            state.search = activate_search_input(search, &state.query().search_query);
        }
        KeyAction::SubmitSearch => {
            let (search, committed) = submit_search(std::mem::take(&mut state.search));
            state.search = search;
            if let Some(text) = committed {
                state.commit_search(text);
            }
        }
        KeyAction::CancelSearch => {
            state.search = cancel_search(std::mem::take(&mut state.search));
        }

        KeyAction::NextLanguage => state.next_language(),
        KeyAction::PrevLanguage => state.prev_language(),
        KeyAction::NextSortKey => state.next_sort_key(),
        KeyAction::PrevSortKey => state.prev_sort_key(),
        KeyAction::ToggleSortOrder => state.toggle_sort_order(),
        KeyAction::ClearFilters => state.clear_filters(),

        KeyAction::ToggleLocale => state.toggle_locale(),
        KeyAction::Help => state.toggle_help(),
        KeyAction::Quit => {}
    }
}

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
