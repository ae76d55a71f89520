//! Doctor command implementation.
//!
//! The `jitt doctor` command checks the project setup without changing
//! anything. Issues (not in a repo, document missing or unreadable) make it
//! exit non-zero; warnings (no project configured) do not.

use std::path::{Path, PathBuf};

use crate::config::{ConfigStore, CONFIG_FILE_NAME};
use crate::error::Result;
use crate::repo::is_inside_repo;
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    project_root: PathBuf,
}

/// Problems collected while running the checks.
#[derive(Debug, Default)]
struct Findings {
    issues: Vec<String>,
    warnings: Vec<String>,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    fn check_repo(&self, ui: &mut dyn UserInterface, findings: &mut Findings) {
        if is_inside_repo(&self.project_root) {
            ui.status(StatusKind::Pass, "Git repository found");
        } else {
            findings
                .issues
                .push("Not inside a Git repository".to_string());
        }
    }

    fn check_config(&self, ui: &mut dyn UserInterface, findings: &mut Findings) {
        let store = ConfigStore::new(&self.project_root);
        if !store.exists() {
            findings
                .issues
                .push(format!("{} file not found", CONFIG_FILE_NAME));
            return;
        }
        ui.status(StatusKind::Pass, &format!("{} file exists", CONFIG_FILE_NAME));

        match store.load() {
            Err(e) => findings
                .issues
                .push(format!("Error loading {}: {}", CONFIG_FILE_NAME, e)),
            Ok(config) if config.project_is_empty() => findings
                .warnings
                .push(format!("No project configured in {}", CONFIG_FILE_NAME)),
            Ok(config) => ui.status(
                StatusKind::Pass,
                &format!("Project configured: {}", config.jira.project),
            ),
        }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut findings = Findings::default();

        self.check_repo(ui, &mut findings);
        self.check_config(ui, &mut findings);

        for warning in &findings.warnings {
            ui.status(StatusKind::Warning, warning);
        }

        if !findings.issues.is_empty() {
            ui.message("");
            for issue in &findings.issues {
                ui.status(StatusKind::Fail, issue);
            }
            ui.message("");
            ui.hint("Run 'jitt init' to set up your project.");
            return Ok(CommandResult::failure(1));
        }

        ui.message("");
        if findings.warnings.is_empty() {
            ui.message("🎉 Everything looks good!");
        } else {
            ui.message("✨ Setup is functional but could be improved.");
        }

        Ok(CommandResult::success())
    }
}
