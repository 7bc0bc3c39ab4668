//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod helpers;
pub mod layout;
pub mod listing;
pub mod repo_list;
mod search_input;
pub mod styles;

pub use help::render_help_overlay;
pub use helpers::{centered_rect, empty_line, format_count};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, ListStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_action, search_input_handler, AppState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ListStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, colors))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal input and
    /// redraws only after a key press or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an already-initialized terminal. No terminal modes are changed.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, colors: ColorConfig) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: ListStyles::with_color_config(colors),
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The underlying terminal (for inspecting a `TestBackend` buffer).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even mid-edit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // While editing, keys go to the draft instead of the bindings
        if self.app_state.search.is_editing() {
            self.handle_search_key(key);
            return false;
        }

        // Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // Unknown key, ignore
        };

        if action == KeyAction::Quit {
            return true;
        }

        let page = self.page_size();
        handle_action(&mut self.app_state, action, page);

        if action.changes_query() {
            debug!(
                ?action,
                visible = self.app_state.visible_len(),
                "Query changed"
            );
        }

        false
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }

    /// Route a key to the search draft editor.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                handle_action(&mut self.app_state, KeyAction::SubmitSearch, 0);
                return;
            }
            KeyCode::Esc => {
                handle_action(&mut self.app_state, KeyAction::CancelSearch, 0);
                return;
            }
            _ => {}
        }

        let search = std::mem::take(&mut self.app_state.search);
        self.app_state.search = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(search, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(search),
            KeyCode::Delete => search_input_handler::handle_delete(search),
            KeyCode::Left => search_input_handler::handle_cursor_left(search),
            KeyCode::Right => search_input_handler::handle_cursor_right(search),
            KeyCode::Home => search_input_handler::handle_cursor_home(search),
            KeyCode::End => search_input_handler::handle_cursor_end(search),
            _ => search,
        };
    }

    /// Records per page for the current terminal size.
    fn page_size(&self) -> usize {
        let area = match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        };
        layout::page_size(area)
    }
}

/// Initialize and run the TUI over `app_state`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(app_state, colors) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Flatten a buffer into newline-separated rows, skipping the cells hidden
/// behind wide characters.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    use unicode_width::UnicodeWidthStr;

    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut skip = 0;
        for x in 0..buffer.area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            out.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
