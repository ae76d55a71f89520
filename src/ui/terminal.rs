//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, JittTheme, NonInteractiveUI, OutputMode, StatusKind, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: JittTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            JittTheme::new()
        } else {
            JittTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", kind.format(&self.theme, msg)).ok();
        }
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_hint(msg)).ok();
        }
    }
}

/// Create the UI for the current process.
///
/// Falls back to plain output when stdout is not a terminal.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_terminal_ui_accepts_all_calls() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        ui.message("hidden");
        ui.success("hidden");
        ui.status(StatusKind::Warning, "hidden");
        ui.hint("hidden");
    }
}
