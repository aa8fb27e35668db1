//! Tool configuration.
//!
//! Settings are read from TOML. The embedded `resources/default.config.toml`
//! supplies the defaults; a user file may override any subset of keys.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_CONFIG_TOML: &str = include_str!("../resources/default.config.toml");

static DEFAULT_CONFIG: OnceLock<Config> = OnceLock::new();

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has mistyped keys.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Directory and file names relative to the database root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_elements_dir")]
    pub elements: PathBuf,
    #[serde(default = "default_reactions_dir")]
    pub reactions: PathBuf,
    #[serde(default = "default_indexes_dir")]
    pub indexes: PathBuf,
    #[serde(default = "default_reaction_index")]
    pub reaction_index: String,
}

fn default_elements_dir() -> PathBuf {
    PathBuf::from("elements")
}
fn default_reactions_dir() -> PathBuf {
    PathBuf::from("reactions")
}
fn default_indexes_dir() -> PathBuf {
    PathBuf::from("indexes")
}
fn default_reaction_index() -> String {
    "index.json".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            elements: default_elements_dir(),
            reactions: default_reactions_dir(),
            indexes: default_indexes_dir(),
            reaction_index: default_reaction_index(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_null_fields")]
    pub top_null_fields: usize,
}

fn default_top_null_fields() -> usize {
    15
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_null_fields: default_top_null_fields(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_applications")]
    pub max_applications: usize,
    #[serde(default = "default_max_reactions")]
    pub max_reactions: usize,
}

fn default_max_applications() -> usize {
    8
}
fn default_max_reactions() -> usize {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_applications: default_max_applications(),
            max_reactions: default_max_reactions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        get_default_config().clone()
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Loads `path` if given, otherwise the embedded defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(p) => {
                let text = std::fs::read_to_string(p).map_err(|source| Error::Io {
                    path: p.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&text)
            }
            None => Ok(get_default_config().clone()),
        }
    }
}

pub fn get_default_config() -> &'static Config {
    DEFAULT_CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("Failed to parse embedded default configuration. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse() {
        let config = get_default_config();
        assert_eq!(config.layout.elements, PathBuf::from("elements"));
        assert_eq!(config.layout.reaction_index, "index.json");
        assert_eq!(config.report.top_null_fields, 15);
        assert_eq!(config.display.max_applications, 8);
        assert_eq!(config.display.max_reactions, 5);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [layout]
            elements = "records/elements"

            [report]
            top_null_fields = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.elements, PathBuf::from("records/elements"));
        assert_eq!(config.layout.reactions, PathBuf::from("reactions"));
        assert_eq!(config.report.top_null_fields, 5);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(Config::from_toml("").unwrap(), *get_default_config());
    }

    #[test]
    fn rejects_invalid_toml() {
        let err = Config::from_toml("not valid [[[toml").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Some(Path::new("/nonexistent/ptdb.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
