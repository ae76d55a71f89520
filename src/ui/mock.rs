//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use jitt::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status(StatusKind::Pass, "Git repository found");
//! ui.error("Not inside a Git repo");
//!
//! assert!(ui.has_status(StatusKind::Pass, "Git repository found"));
//! assert!(ui.errors().contains(&"Not inside a Git repo".to_string()));
//! ```

use super::{StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    hints: Vec<String>,
    /// Every stdout-bound line in the order it was produced.
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Stdout-bound lines in order, as plain text.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check whether a status line with this kind and text was shown.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses.iter().any(|(k, m)| *k == kind && m == msg)
    }

    /// Check whether any stdout-bound line contains `needle`.
    pub fn stdout_contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
        self.transcript.push(kind.format_plain(msg));
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }
}
