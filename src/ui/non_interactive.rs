//! Plain-text UI for pipes, CI and other non-TTY output.

use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation that writes unstyled lines.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", kind.format_plain(msg));
        }
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.message("hidden");
        ui.status(StatusKind::Pass, "hidden");
        ui.error("still shown");
    }
}
