//! Status vocabulary for check results.
//!
//! `StatusKind` is the single set of icons and colors used by `jitt doctor`
//! and any other command that reports pass/fail lines.

use super::theme::JittTheme;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Pass,
    /// Check failed; the setup is not usable.
    Fail,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
            Self::Warning => "⚠️ ",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &JittTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Pass => theme.success.apply_to(icon).to_string(),
            Self::Fail => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &JittTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Pass.icon(), "✅");
        assert_eq!(StatusKind::Fail.icon(), "❌");
        assert!(StatusKind::Warning.icon().starts_with("⚠"));
    }

    #[test]
    fn format_plain_prefixes_icon() {
        assert_eq!(
            StatusKind::Pass.format_plain("Git repository found"),
            "✅ Git repository found"
        );
        assert_eq!(
            StatusKind::Fail.format_plain(".jitt.yaml file not found"),
            "❌ .jitt.yaml file not found"
        );
    }

    #[test]
    fn format_with_plain_theme_matches_format_plain() {
        let theme = JittTheme::plain();
        for kind in [StatusKind::Pass, StatusKind::Fail, StatusKind::Warning] {
            assert_eq!(kind.format(&theme, "msg"), kind.format_plain("msg"));
        }
    }
}
