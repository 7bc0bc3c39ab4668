//! Search input handling (pure state transitions).
//!
//! Handles text input for the `SearchState::Editing` variant.
//! All functions are pure - no side effects, testable without TUI.

use crate::state::search::byte_offset;
use crate::state::SearchState;

/// Insert `ch` at the cursor and advance the cursor.
///
/// No-op if not editing.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Editing { mut draft, cursor } => {
            let at = byte_offset(&draft, cursor);
            draft.insert(at, ch);
            SearchState::Editing {
                draft,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor.
///
/// No-op if not editing or the cursor is at 0.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Editing { mut draft, cursor } if cursor > 0 => {
            let at = byte_offset(&draft, cursor - 1);
            draft.remove(at);
            SearchState::Editing {
                draft,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Delete the character under the cursor.
///
/// No-op if not editing or the cursor is at the end.
pub fn handle_delete(state: SearchState) -> SearchState {
    match state {
        SearchState::Editing { mut draft, cursor } => {
            let at = byte_offset(&draft, cursor);
            if at < draft.len() {
                draft.remove(at);
            }
            SearchState::Editing { draft, cursor }
        }
        other => other,
    }
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Editing { draft, cursor } => SearchState::Editing {
            draft,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one character. Saturates at the draft length.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Editing { draft, cursor } => {
            let max_cursor = draft.chars().count();
            SearchState::Editing {
                draft,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Move cursor to the start of the draft.
pub fn handle_cursor_home(state: SearchState) -> SearchState {
    match state {
        SearchState::Editing { draft, .. } => SearchState::Editing { draft, cursor: 0 },
        other => other,
    }
}

/// Move cursor past the last character of the draft.
pub fn handle_cursor_end(state: SearchState) -> SearchState {
    match state {
        SearchState::Editing { draft, .. } => SearchState::editing(draft),
        other => other,
    }
}

/// Open the draft editor, seeded with the committed query.
///
/// No-op if already editing.
pub fn activate_search_input(state: SearchState, committed: &str) -> SearchState {
    match state {
        SearchState::Idle => SearchState::editing(committed),
        other => other,
    }
}

/// Discard the draft. The committed query is untouched.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Idle
}

/// Close the editor and return the draft to commit.
///
/// Returns `None` when not editing. An empty draft is a valid commit: it
/// clears the search.
pub fn submit_search(state: SearchState) -> (SearchState, Option<String>) {
    match state {
        SearchState::Editing { draft, .. } => (SearchState::Idle, Some(draft)),
        SearchState::Idle => (SearchState::Idle, None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
