//! Search draft state machine.
//!
//! The committed search lives in `QueryState::search_query` and drives the
//! list. While the user types, keystrokes go into a separate draft; the
//! list only changes when the draft is submitted.

// ===== SearchState =====

/// Search input state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Not editing. The committed query (possibly empty) is in effect.
    #[default]
    Idle,
    /// User is editing a draft.
    ///
    /// `cursor` counts characters, not bytes, so it stays valid for
    /// multi-byte input.
    Editing {
        /// Uncommitted search text.
        draft: String,
        /// Insertion point, in characters.
        cursor: usize,
    },
}

impl SearchState {
    /// Start editing with `initial` as the draft, cursor at the end.
    pub fn editing(initial: impl Into<String>) -> Self {
        let draft = initial.into();
        let cursor = draft.chars().count();
        SearchState::Editing { draft, cursor }
    }

    /// Whether keystrokes should be routed to the draft editor.
    pub fn is_editing(&self) -> bool {
        matches!(self, SearchState::Editing { .. })
    }

    /// Current draft text, if editing.
    pub fn draft(&self) -> Option<&str> {
        match self {
            SearchState::Editing { draft, .. } => Some(draft),
            SearchState::Idle => None,
        }
    }

    /// Cursor position in characters, if editing.
    pub fn cursor(&self) -> Option<usize> {
        match self {
            SearchState::Editing { cursor, .. } => Some(*cursor),
            SearchState::Idle => None,
        }
    }
}

/// Byte offset of character index `cursor` in `text`, clamped to the end.
pub(crate) fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map_or(text.len(), |(offset, _)| offset)
}
