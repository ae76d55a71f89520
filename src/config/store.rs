//! Reading and writing the `.jitt.yaml` document.
//!
//! [`ConfigStore`] is bound to one directory and keeps no parser state
//! between calls: every operation reads or writes the document afresh.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::config::schema::{JittConfig, CONFIG_FILE_NAME};
use crate::error::{JittError, Result};

/// Access to the configuration document of a single directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the document in `dir` (ancestors are not searched).
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the document exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a new document with the given project key.
    ///
    /// Does not check for an existing document; callers must check
    /// [`exists`](Self::exists) first so nothing is overwritten silently.
    pub fn create(&self, project: &str) -> Result<()> {
        let content = serde_yaml::to_string(&JittConfig::with_project(project))
            .map_err(|e| JittError::Other(e.into()))?;

        tracing::debug!("Creating {}", self.path.display());
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Load the document, applying defaults for anything absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the document doesn't exist.
    /// Returns `ConfigParseError` if it isn't valid YAML of the right shape.
    pub fn load(&self) -> Result<JittConfig> {
        let value = self.read_document()?;
        if value.is_null() {
            return Ok(JittConfig::default());
        }

        serde_yaml::from_value(value).map_err(|e| self.parse_error(e.to_string()))
    }

    /// Set a dotted key path (e.g. `jira.project`) and rewrite the document.
    ///
    /// Every other key in the document, known or not, is kept as is.
    pub fn update(&self, key: &str, value: &str) -> Result<()> {
        let mut document = self.read_document()?;
        set_path(&mut document, key, Value::String(value.to_string()))
            .map_err(|message| self.parse_error(message))?;

        let content = serde_yaml::to_string(&document).map_err(|e| JittError::Other(e.into()))?;

        tracing::debug!("Updating {} in {}", key, self.path.display());
        write_atomic(&self.path, &content)
    }

    fn read_document(&self) -> Result<Value> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JittError::ConfigNotFound {
                    path: self.path.clone(),
                }
            } else {
                JittError::Io(e)
            }
        })?;

        serde_yaml::from_str(&content).map_err(|e| self.parse_error(e.to_string()))
    }

    fn parse_error(&self, message: String) -> JittError {
        JittError::ConfigParseError {
            path: self.path.clone(),
            message,
        }
    }
}

/// Write to a sibling temp file, then rename it over `path`.
///
/// The temp file is removed again if the rename fails.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        fs::remove_file(&temp_path).ok();
        return Err(e.into());
    }

    Ok(())
}

/// Walk `key` segment by segment, creating mappings where nothing exists yet.
fn set_path(document: &mut Value, key: &str, new_value: Value) -> std::result::Result<(), String> {
    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(format!("invalid key path '{}'", key));
    }

    let mut node = document;
    for (i, segment) in segments.iter().enumerate() {
        if node.is_null() {
            *node = Value::Mapping(Mapping::new());
        }
        let mapping = match node {
            Value::Mapping(m) => m,
            _ if i == 0 => return Err("document root is not a mapping".to_string()),
            _ => return Err(format!("'{}' is not a mapping", segments[..i].join("."))),
        };

        let entry_key = Value::String((*segment).to_string());
        if i == segments.len() - 1 {
            mapping.insert(entry_key, new_value);
            return Ok(());
        }
        node = mapping.entry(entry_key).or_insert(Value::Null);
    }

    Ok(())
}
