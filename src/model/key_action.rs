//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Move the selection down one record. Default: j/↓
    SelectNext,
    /// Move the selection up one record. Default: k/↑
    SelectPrev,
    /// Move the selection down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Move the selection up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Jump to the first record. Default: g/Home
    SelectFirst,
    /// Jump to the last record. Default: G/End
    SelectLast,

    // Search
    /// Open the search draft for editing. Default: //Ctrl+f
    StartSearch,
    /// Commit the draft as the active search. Default: Enter (while editing)
    SubmitSearch,
    /// Discard the draft, keep the committed search. Default: Esc (while editing)
    CancelSearch,

    // Filters and sorting
    /// Select the next language in the facet list. Default: l
    NextLanguage,
    /// Select the previous language in the facet list. Default: L
    PrevLanguage,
    /// Cycle sort key forward. Default: s
    NextSortKey,
    /// Cycle sort key backward. Default: S
    PrevSortKey,
    /// Flip ascending/descending. Default: o
    ToggleSortOrder,
    /// Drop search, language and range filters. Default: c
    ClearFilters,

    // Application
    /// Switch between the two display locales. Default: t
    ToggleLocale,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action changes the query state (and so the visible list).
    pub fn changes_query(self) -> bool {
        matches!(
            self,
            KeyAction::SubmitSearch
                | KeyAction::NextLanguage
                | KeyAction::PrevLanguage
                | KeyAction::NextSortKey
                | KeyAction::PrevSortKey
                | KeyAction::ToggleSortOrder
                | KeyAction::ClearFilters
        )
    }
}
