//! Project-local configuration for jitt.
//!
//! - Schema definitions and known keys in [`schema`]
//! - Document access in [`store`]
//!
//! # Example
//!
//! ```
//! use jitt::config::ConfigStore;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let store = ConfigStore::new(temp.path());
//! store.create("ABC").unwrap();
//!
//! store.update("jira.project", "XYZ").unwrap();
//! assert_eq!(store.load().unwrap().jira.project, "XYZ");
//! ```
//!
//! # Configuration File Location
//!
//! The document is `.jitt.yaml` in the working directory. Parent
//! directories are never consulted.

pub mod schema;
pub mod store;

pub use schema::{ConfigKey, JiraConfig, JittConfig, CONFIG_FILE_NAME, KNOWN_KEYS};
pub use store::ConfigStore;
