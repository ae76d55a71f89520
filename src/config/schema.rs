//! Schema for the `.jitt.yaml` document.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// File name of the project-local configuration document.
pub const CONFIG_FILE_NAME: &str = ".jitt.yaml";

/// User-facing config keys and the document paths they map to.
///
/// `jitt config` only accepts keys listed here.
pub const KNOWN_KEYS: &[ConfigKey] = &[ConfigKey {
    name: "project",
    path: "jira.project",
    read: jira_project,
}];

fn jira_project(config: &JittConfig) -> &str {
    &config.jira.project
}

/// A configuration key exposed on the command line.
#[derive(Debug, Clone, Copy)]
pub struct ConfigKey {
    /// Name typed by the user (`jitt config project`).
    pub name: &'static str,
    /// Dotted path inside the document.
    pub path: &'static str,
    /// Reads the value from a loaded config.
    pub read: fn(&JittConfig) -> &str,
}

impl ConfigKey {
    /// Look up a known key by its user-facing name.
    pub fn find(name: &str) -> Option<&'static ConfigKey> {
        KNOWN_KEYS.iter().find(|k| k.name == name)
    }

    /// Comma-separated list of all known key names.
    pub fn available() -> String {
        KNOWN_KEYS
            .iter()
            .map(|k| k.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Read this key's value from a loaded config.
    pub fn get<'a>(&self, config: &'a JittConfig) -> &'a str {
        (self.read)(config)
    }
}

/// Root of the `.jitt.yaml` document.
///
/// Unknown top-level keys are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JittConfig {
    /// Jira settings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub jira: JiraConfig,
}

/// The `jira:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Jira project key, e.g. `ABC`. Empty when not configured.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub project: String,
}

impl JittConfig {
    /// Create a config for the given project key.
    pub fn with_project(project: impl Into<String>) -> Self {
        Self {
            jira: JiraConfig {
                project: project.into(),
            },
        }
    }

    /// True when no project key is set.
    pub fn project_is_empty(&self) -> bool {
        self.jira.project.is_empty()
    }
}

// `jira:` or `project:` with no value parses as null.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Hand-edited documents may hold `project: 1234` or `project: true`.
fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarVisitor)
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }
}
