//! Config command implementation.
//!
//! The `jitt config` command shows or sets values in `.jitt.yaml`:
//!
//! - `jitt config` shows every known key
//! - `jitt config project` shows one key
//! - `jitt config project XYZ` sets it

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigKey, ConfigStore, JittConfig, CONFIG_FILE_NAME, KNOWN_KEYS};
use crate::error::{JittError, Result};
use crate::repo::is_inside_repo;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn load(&self, store: &ConfigStore, ui: &mut dyn UserInterface) -> Option<JittConfig> {
        match store.load() {
            Ok(config) => Some(config),
            Err(e) => {
                ui.error(&format!("Error loading config: {}", e));
                None
            }
        }
    }

    fn show_all(&self, store: &ConfigStore, ui: &mut dyn UserInterface) -> CommandResult {
        let Some(config) = self.load(store, ui) else {
            return CommandResult::failure(1);
        };

        ui.message("Current configuration:");
        for key in KNOWN_KEYS {
            ui.message(&format!("  {} = {}", key.path, key.get(&config)));
        }
        CommandResult::success()
    }

    fn show_key(
        &self,
        key: &ConfigKey,
        store: &ConfigStore,
        ui: &mut dyn UserInterface,
    ) -> CommandResult {
        let Some(config) = self.load(store, ui) else {
            return CommandResult::failure(1);
        };

        let value = key.get(&config);
        if value.is_empty() {
            ui.message(&format!("No {} configured", key.name));
        } else {
            ui.message(&format!("{} = {}", key.path, value));
        }
        CommandResult::success()
    }

    fn set_key(
        &self,
        key: &ConfigKey,
        value: &str,
        store: &ConfigStore,
        ui: &mut dyn UserInterface,
    ) -> CommandResult {
        if let Err(e) = store.update(key.path, value) {
            ui.error(&format!("Error updating config: {}", e));
            return CommandResult::failure(1);
        }

        ui.message(&format!("Set {} = {}", key.path, value));
        CommandResult::success()
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !is_inside_repo(&self.project_root) {
            ui.error(&format!("{}.", JittError::NotInRepo));
            return Ok(CommandResult::failure(1));
        }

        let store = ConfigStore::new(&self.project_root);
        if !store.exists() {
            ui.error(&format!(
                "{} file not found - run 'jitt init' first",
                CONFIG_FILE_NAME
            ));
            return Ok(CommandResult::failure(1));
        }

        let Some(name) = self.args.key.as_deref() else {
            return Ok(self.show_all(&store, ui));
        };

        let Some(key) = ConfigKey::find(name) else {
            let err = JittError::UnknownConfigKey {
                key: name.to_string(),
            };
            ui.error(&err.to_string());
            ui.error(&format!("Available keys: {}", ConfigKey::available()));
            return Ok(CommandResult::failure(1));
        };

        let result = match self.args.value.as_deref() {
            None => self.show_key(key, &store, ui),
            Some(value) => self.set_key(key, value, &store, ui),
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn git_project(config: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        if let Some(content) = config {
            fs::write(temp.path().join(CONFIG_FILE_NAME), content).unwrap();
        }
        temp
    }

    fn run(root: &Path, key: Option<&str>, value: Option<&str>) -> (CommandResult, MockUI) {
        let args = ConfigArgs {
            key: key.map(String::from),
            value: value.map(String::from),
        };
        let cmd = ConfigCommand::new(root, args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn refuses_outside_repo() {
        let temp = TempDir::new().unwrap();

        let (result, ui) = run(temp.path(), None, None);

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("Not inside a Git repo"));
    }

    #[test]
    fn reports_missing_document() {
        let temp = git_project(None);

        let (result, ui) = run(temp.path(), Some("project"), Some("ABC"));

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains(".jitt.yaml file not found"));
        assert!(ui.errors()[0].contains("run 'jitt init' first"));
        assert!(!temp.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn shows_all_keys() {
        let temp = git_project(Some("jira:\n  project: TESTPROJ"));

        let (result, ui) = run(temp.path(), None, None);

        assert_eq!(result.exit_code, 0);
        assert_eq!(
            ui.messages(),
            &["Current configuration:", "  jira.project = TESTPROJ"]
        );
    }

    #[test]
    fn shows_all_keys_when_empty() {
        let temp = git_project(Some("jira:\n  project: \"\""));

        let (result, ui) = run(temp.path(), None, None);

        assert_eq!(result.exit_code, 0);
        assert!(ui.messages().contains(&"  jira.project = ".to_string()));
    }

    #[test]
    fn shows_project() {
        let temp = git_project(Some("jira:\n  project: TESTPROJ"));

        let (result, ui) = run(temp.path(), Some("project"), None);

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.messages(), &["jira.project = TESTPROJ"]);
    }

    #[test]
    fn shows_no_project_configured() {
        let temp = git_project(Some("jira:\n  project: \"\""));

        let (result, ui) = run(temp.path(), Some("project"), None);

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.messages(), &["No project configured"]);
    }

    #[test]
    fn sets_project() {
        let temp = git_project(Some("jira:\n  project: OLDPROJ"));

        let (result, ui) = run(temp.path(), Some("project"), Some("NEWPROJ"));

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.messages(), &["Set jira.project = NEWPROJ"]);
        let content = fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(content.contains("project: NEWPROJ"));
        assert!(!content.contains("OLDPROJ"));
    }

    #[test]
    fn sets_project_from_empty() {
        let temp = git_project(Some("jira:\n  project: \"\""));

        let (result, _ui) = run(temp.path(), Some("project"), Some("FIRSTPROJ"));

        assert_eq!(result.exit_code, 0);
        let config = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.jira.project, "FIRSTPROJ");
    }

    #[test]
    fn rejects_unknown_key() {
        let temp = git_project(Some("jira:\n  project: TESTPROJ"));

        let (result, ui) = run(temp.path(), Some("unknown"), None);

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.errors(),
            &["Unknown config key: unknown", "Available keys: project"]
        );
    }

    #[test]
    fn reports_malformed_document() {
        let temp = git_project(Some("invalid yaml content ["));

        let (result, ui) = run(temp.path(), Some("project"), None);

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].starts_with("Error loading config:"));
    }

    #[test]
    fn reports_update_failure() {
        let temp = git_project(Some("jira: ABC\n"));

        let (result, ui) = run(temp.path(), Some("project"), Some("X"));

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].starts_with("Error updating config:"));
    }
}
