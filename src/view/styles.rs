//! Repository list styling configuration.
//!
//! One `ListStyles` value carries every style the renderer uses, so turning
//! colors off is a single switch.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag / `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles for the browser screen.
///
/// With colors disabled every style keeps only its modifiers (bold,
/// reversed, underline), so matches and the selection stay visible on a
/// monochrome terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Screen title.
    pub title: Style,
    /// Secondary text: tagline, labels, dates.
    pub muted: Style,
    /// Repository name.
    pub name: Style,
    /// Highlighted search hit.
    pub matched: Style,
    /// Language badge.
    pub language: Style,
    /// Star/fork counts.
    pub counts: Style,
    /// Repository URL.
    pub url: Style,
    /// Value of an active control (language, sort key, order).
    pub control_value: Style,
    /// Background of the selected list item.
    pub selected: Style,
    /// Category header in the help overlay.
    pub section_header: Style,
    /// Key column in the help overlay.
    pub key: Style,
    /// Border of focused widgets (search box while editing, help overlay).
    pub focus_border: Style,
}

impl ListStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                name: Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
                matched: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                language: Style::default().fg(Color::Magenta),
                counts: Style::default().fg(Color::Yellow),
                url: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
                control_value: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().bg(Color::Rgb(40, 44, 52)),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                focus_border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
                name: Style::default().add_modifier(Modifier::BOLD),
                matched: Style::default().add_modifier(Modifier::REVERSED),
                language: Style::default(),
                counts: Style::default(),
                url: Style::default().add_modifier(Modifier::UNDERLINED),
                control_value: Style::default().add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                section_header: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
                focus_border: Style::default(),
            }
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
