//! Passthrough to git.
//!
//! Any subcommand jitt does not handle itself is run by `git` with exactly
//! the arguments it was given. The child shares our stdin, stdout and stderr,
//! and its exit code becomes ours.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{self, Stdio};

use crate::error::{JittError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Program that receives passed-through commands.
pub const GIT_PROGRAM: &str = "git";

/// The passthrough command implementation.
pub struct PassthroughCommand {
    project_root: PathBuf,
    program: OsString,
    args: Vec<OsString>,
}

impl PassthroughCommand {
    /// Create a passthrough to `git`.
    pub fn new(project_root: &Path, args: Vec<OsString>) -> Self {
        Self::with_program(project_root, GIT_PROGRAM, args)
    }

    /// Create a passthrough to an arbitrary program.
    pub fn with_program(
        project_root: &Path,
        program: impl Into<OsString>,
        args: Vec<OsString>,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            program: program.into(),
            args,
        }
    }

    /// Build the child process with inherited standard streams.
    pub fn build(&self) -> process::Command {
        let mut cmd = process::Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.project_root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Command for PassthroughCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Passing through to {:?}: {:?}", self.program, self.args);

        let status = self
            .build()
            .status()
            .map_err(|source| JittError::GitLaunch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        // Killed by a signal: no exit code to mirror.
        let exit_code = status.code().unwrap_or(1);
        tracing::debug!("{:?} exited with {}", self.program, exit_code);

        Ok(CommandResult::from_exit_code(exit_code))
    }
}
