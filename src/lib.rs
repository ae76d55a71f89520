//! jitt - Jira + Git + Tiny Tooling.
//!
//! jitt is a thin wrapper around `git`. It adds a few commands for managing
//! a project-local `.jitt.yaml` that records the Jira project key, and hands
//! every other command to `git` untouched.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing and commands
//! - [`config`] - The `.jitt.yaml` schema and store
//! - [`error`] - Error types and result aliases
//! - [`repo`] - Git repository detection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use jitt::config::ConfigStore;
//! use jitt::repo::is_inside_repo;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::create_dir(temp.path().join(".git")).unwrap();
//! assert!(is_inside_repo(temp.path()));
//!
//! let store = ConfigStore::new(temp.path());
//! store.create("ABC").unwrap();
//! assert_eq!(store.load().unwrap().jira.project, "ABC");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod repo;
pub mod ui;

pub use error::{JittError, Result};
