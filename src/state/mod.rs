//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::AppState;
pub use search::SearchState;
