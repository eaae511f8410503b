//! Application state and logic for the plotter session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::eval::{Builtin, ExprFunction, Function};
use crate::input::{Action, InputHandler};
use crate::plane::{Plane, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::render::GlyphSet;
use crate::theme::Theme;
use crate::Result;

/// Main application state.
///
/// Owns the viewport, the installed function/derivative pair, and the UI
/// flags. The compiled expression is an explicit field, not process-wide
/// state: installing a new expression drops the old pair exactly once.
pub struct App {
    /// The viewport.
    pub plane: Plane,
    /// Key dispatch.
    pub input: InputHandler,
    /// Color theme.
    pub theme: Theme,
    /// Glyph set for the plane.
    pub glyphs: GlyphSet,

    function: Box<dyn Function>,
    derivative: Box<dyn Function>,

    /// Whether the derivative curve is displayed.
    pub show_derivative: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the expression entry overlay is visible.
    pub show_entry: bool,
    /// Text being typed in the entry overlay.
    pub entry: String,
    /// Compile error from the last entry attempt, shown inline.
    pub entry_error: Option<String>,

    pending_resize: Option<(u16, u16)>,
}

impl App {
    /// Creates the session state: default viewport, the given start
    /// expression, and UI settings from `config`.
    ///
    /// An invalid start expression does not abort: the session opens with
    /// the entry prompt showing the compile error, and a built-in `sin(x)`
    /// is plotted until a valid expression is entered.
    #[must_use]
    pub fn new(expression: &str, config: &Config, columns: u16, rows: u16) -> Self {
        let mut app = Self {
            plane: Plane::new(columns, rows),
            input: InputHandler::new(config.global.vim_keys),
            theme: config.theme.clone(),
            glyphs: config.global.glyph_set(),
            function: Box::new(Builtin::sin()),
            derivative: Box::new(Builtin::cos()),
            show_derivative: false,
            show_help: false,
            show_entry: false,
            entry: String::new(),
            entry_error: None,
            pending_resize: None,
        };

        if let Err(e) = app.install_expression(expression) {
            app.entry = expression.to_string();
            app.entry_error = Some(e.to_string());
            app.show_entry = true;
        }

        app
    }

    /// The plotted function.
    #[must_use]
    pub fn function(&self) -> &dyn Function {
        self.function.as_ref()
    }

    /// The derivative of the plotted function. Always present: installation
    /// succeeds only when both the function and its derivative compile.
    #[must_use]
    pub fn derivative(&self) -> &dyn Function {
        self.derivative.as_ref()
    }

    /// Compiles `text` and its derivative and installs the pair, restoring
    /// the default view (new function, fresh view).
    ///
    /// # Errors
    ///
    /// On any compile failure nothing is installed and the previous pair
    /// stays in place.
    pub fn install_expression(&mut self, text: &str) -> Result<()> {
        let function = ExprFunction::compile(text)?;
        let derivative = function.derivative()?;

        self.function = Box::new(function);
        self.derivative = Box::new(derivative);
        self.plane.restore();
        Ok(())
    }

    /// Number of header lines: the expression, plus the derivative when
    /// shown.
    #[must_use]
    pub fn header_rows(&self) -> u16 {
        if self.show_derivative {
            2
        } else {
            1
        }
    }

    /// Records a terminal resize notification, consumed at the top of the
    /// next loop iteration.
    pub fn queue_resize(&mut self, columns: u16, rows: u16) {
        self.pending_resize = Some((columns, rows));
    }

    /// Applies a pending resize: grid refresh only, bounds untouched.
    pub fn apply_pending_resize(&mut self) {
        if let Some((columns, rows)) = self.pending_resize.take() {
            self.plane.set_grid(columns, rows.saturating_sub(self.header_rows()).max(1));
        }
    }

    /// Handle keyboard input. Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // Entry overlay captures everything while open.
        if self.show_entry {
            match code {
                KeyCode::Esc => {
                    // Cancel: keep the current function.
                    self.show_entry = false;
                    self.entry.clear();
                    self.entry_error = None;
                }
                KeyCode::Enter => {
                    let text = self.entry.clone();
                    match self.install_expression(&text) {
                        Ok(()) => {
                            self.show_entry = false;
                            self.entry.clear();
                            self.entry_error = None;
                        }
                        Err(e) => {
                            // Re-prompt with the error shown inline.
                            self.entry_error = Some(e.to_string());
                        }
                    }
                }
                KeyCode::Backspace => {
                    self.entry.pop();
                }
                KeyCode::Char(c) => {
                    self.entry.push(c);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay closes on any key.
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match self.input.handle_key(KeyEvent::new(code, modifiers)) {
            Action::Quit => return true,
            Action::PanUp => self.plane.shift(0.0, 1.0),
            Action::PanDown => self.plane.shift(0.0, -1.0),
            Action::PanLeft => self.plane.shift(-1.0, 0.0),
            Action::PanRight => self.plane.shift(1.0, 0.0),
            Action::ZoomIn => self.plane.zoom(ZOOM_IN_FACTOR),
            Action::ZoomOut => self.plane.zoom(ZOOM_OUT_FACTOR),
            Action::Restore => self.plane.restore(),
            Action::ToggleDerivative => self.show_derivative = !self.show_derivative,
            Action::EditExpression => {
                self.show_entry = true;
                self.entry.clear();
                self.entry_error = None;
            }
            Action::Help => self.show_help = true,
            Action::None => {}
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new("sin(x)", &Config::default(), 80, 24)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_installs_expression() {
        let app = test_app();
        assert!(!app.show_entry);
        assert!(app.function().describe().contains("sin"));
        assert!(!app.show_derivative);
    }

    #[test]
    fn test_new_with_invalid_expression_opens_entry() {
        let app = App::new("sin(", &Config::default(), 80, 24);
        assert!(app.show_entry);
        assert!(app.entry_error.is_some());
        assert_eq!(app.entry, "sin(");
        // The fallback function keeps the plot alive.
        assert_eq!(app.function().describe(), "sin(x)");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = test_app();
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_pan_keys_move_viewport() {
        let mut app = test_app();
        let xmin = app.plane.xmin;
        let ymin = app.plane.ymin;

        assert!(!press(&mut app, KeyCode::Char('l')));
        assert!(app.plane.xmin > xmin);

        press(&mut app, KeyCode::Char('k'));
        assert!(app.plane.ymin > ymin);
    }

    #[test]
    fn test_zoom_and_restore() {
        let mut app = test_app();
        let span = app.plane.xmax - app.plane.xmin;

        press(&mut app, KeyCode::Char('+'));
        assert!(app.plane.xmax - app.plane.xmin < span);

        press(&mut app, KeyCode::Char('r'));
        assert!((app.plane.xmax - app.plane.xmin - span).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_toggle() {
        let mut app = test_app();
        assert_eq!(app.header_rows(), 1);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.show_derivative);
        assert_eq!(app.header_rows(), 2);

        press(&mut app, KeyCode::Char('d'));
        assert!(!app.show_derivative);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.show_help);

        // Any key closes, including one that would otherwise quit.
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!app.show_help);
    }

    #[test]
    fn test_entry_typing_and_install() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        assert!(app.show_entry);

        for c in "cos(x)".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.entry, "cos(x)");

        press(&mut app, KeyCode::Enter);
        assert!(!app.show_entry);
        assert!(app.function().describe().contains("cos"));
    }

    #[test]
    fn test_entry_install_restores_view() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('+'));
        let zoomed = app.plane.xmax - app.plane.xmin;

        press(&mut app, KeyCode::Char('f'));
        for c in "x^2".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.plane.xmax - app.plane.xmin > zoomed);
    }

    #[test]
    fn test_entry_failure_reprompts_and_keeps_function() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        for c in "x +".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.show_entry, "compile failure should keep the prompt open");
        assert!(app.entry_error.is_some());
        assert!(app.function().describe().contains("sin"));
    }

    #[test]
    fn test_entry_backspace_and_cancel() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.entry, "x");

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_entry);
        assert!(app.function().describe().contains("sin"));
    }

    #[test]
    fn test_entry_captures_binding_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('q'));

        // 'q' is text while the entry is open, not quit.
        assert_eq!(app.entry, "q");
        assert!(app.show_entry);
    }

    #[test]
    fn test_resize_is_queued_and_applied() {
        let mut app = test_app();
        let bounds = (app.plane.xmin, app.plane.xmax);

        app.queue_resize(120, 40);
        assert_eq!(app.plane.columns, 80, "not applied until consumed");

        app.apply_pending_resize();
        assert_eq!(app.plane.columns, 120);
        assert_eq!(app.plane.rows, 39); // minus the header line
        assert_eq!(bounds, (app.plane.xmin, app.plane.xmax));

        // Nothing pending: a second apply is a no-op.
        app.apply_pending_resize();
        assert_eq!(app.plane.columns, 120);
    }

    #[test]
    fn test_vim_keys_config_respected() {
        let mut config = Config::default();
        config.global.vim_keys = false;
        let mut app = App::new("sin(x)", &config, 80, 24);

        let xmin = app.plane.xmin;
        press(&mut app, KeyCode::Char('l'));
        assert!((app.plane.xmin - xmin).abs() < 1e-12);
    }
}
