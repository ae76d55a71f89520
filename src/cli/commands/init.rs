//! Init command implementation.
//!
//! The `jitt init` command creates `.jitt.yaml` in the current directory.
//! It refuses to run outside a Git repository and never overwrites an
//! existing document.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{ConfigStore, CONFIG_FILE_NAME};
use crate::error::{JittError, Result};
use crate::repo::is_inside_repo;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !is_inside_repo(&self.project_root) {
            ui.error(&format!("{}. Config not created", JittError::NotInRepo));
            return Ok(CommandResult::failure(1));
        }

        let store = ConfigStore::new(&self.project_root);
        if store.exists() {
            let err = JittError::ConfigExists {
                path: PathBuf::from(CONFIG_FILE_NAME),
            };
            ui.error(&err.to_string());
            return Ok(CommandResult::failure(1));
        }

        let project = self.args.project.as_deref().unwrap_or("");
        if let Err(e) = store.create(project) {
            ui.error(&format!("Error creating {}: {}", CONFIG_FILE_NAME, e));
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!("{} created", CONFIG_FILE_NAME));
        Ok(CommandResult::success())
    }
}
