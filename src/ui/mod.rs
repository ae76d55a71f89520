//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`NonInteractiveUI`] for pipes, CI and other non-TTY output
//! - [`MockUI`] for capturing output in tests
//!
//! Informational output goes to stdout; errors always go to stderr.
//!
//! # Example
//!
//! ```
//! use jitt::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("Setup complete!");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, JittTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line on stdout.
    fn message(&mut self, msg: &str);

    /// Display a success line on stdout.
    fn success(&mut self, msg: &str);

    /// Display an error line on stderr. Never suppressed.
    fn error(&mut self, msg: &str);

    /// Display a check result with its status icon on stdout.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display a remediation hint on stdout.
    fn hint(&mut self, msg: &str);
}
