//! Input handling for the plotter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action resulting from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Pan the viewport up.
    PanUp,
    /// Pan the viewport down.
    PanDown,
    /// Pan the viewport left.
    PanLeft,
    /// Pan the viewport right.
    PanRight,
    /// Zoom in (~5% per step).
    ZoomIn,
    /// Zoom out (~5% per step).
    ZoomOut,
    /// Restore the default view.
    Restore,
    /// Toggle derivative display.
    ToggleDerivative,
    /// Prompt for a new expression.
    EditExpression,
    /// Toggle the help overlay.
    Help,
    /// No action.
    None,
}

/// Input handler with configurable vim keys.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Enable vim-style keys (hjkl).
    pub vim_keys: bool,
}

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new(vim_keys: bool) -> Self {
        Self { vim_keys }
    }

    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        // Check for Ctrl+C or Ctrl+Q
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Action::Quit,
                _ => {}
            }
        }

        match event.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

            // Pan
            KeyCode::Up => Action::PanUp,
            KeyCode::Down => Action::PanDown,
            KeyCode::Left => Action::PanLeft,
            KeyCode::Right => Action::PanRight,

            // Vim keys
            KeyCode::Char('k') if self.vim_keys => Action::PanUp,
            KeyCode::Char('j') if self.vim_keys => Action::PanDown,
            KeyCode::Char('h') if self.vim_keys => Action::PanLeft,
            KeyCode::Char('l') if self.vim_keys => Action::PanRight,

            // Zoom
            KeyCode::Char('+') => Action::ZoomIn,
            KeyCode::Char('-') => Action::ZoomOut,

            // View and function
            KeyCode::Char('r') => Action::Restore,
            KeyCode::Char('d') => Action::ToggleDerivative,
            KeyCode::Char('f') => Action::EditExpression,

            // Help
            KeyCode::Char('m') | KeyCode::Char('?') | KeyCode::F(1) => Action::Help,

            _ => Action::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(true)
    }
}
