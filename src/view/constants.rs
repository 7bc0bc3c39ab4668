//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header in lines (title + tagline).
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the search box in lines (border + input).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the facet/sort control bar in lines.
pub const CONTROLS_HEIGHT: u16 = 1;

/// Height of the footer in lines (key hints + copyright).
pub const FOOTER_HEIGHT: u16 = 2;

/// Lines each repository occupies in the list.
///
/// Name/meta line, description line, URL/dates line.
pub const ROW_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
