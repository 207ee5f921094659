use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Search engine configuration, persisted as search.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default)]
    pub schema: SchemaKeys,
}

impl SearchConfig {
    /// Returns the config file path within the given directory.
    pub fn path(config_dir: &Path) -> std::path::PathBuf {
        config_dir.join("search.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "search config missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let schema = &self.schema;

        if schema.display_name_annotation_key.is_empty() {
            errors.push("display_name_annotation_key must not be empty".to_string());
        }

        if schema.creator_annotation_key.is_empty() {
            errors.push("creator_annotation_key must not be empty".to_string());
        }

        if schema.workspace_label_key.is_empty() {
            errors.push("workspace_label_key must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = SchemaKeys::default();
        let pick = |value: &str, default: String| {
            if value.is_empty() {
                default
            } else {
                value.to_string()
            }
        };
        Self {
            schema: SchemaKeys {
                display_name_annotation_key: pick(
                    &self.schema.display_name_annotation_key,
                    defaults.display_name_annotation_key,
                ),
                creator_annotation_key: pick(
                    &self.schema.creator_annotation_key,
                    defaults.creator_annotation_key,
                ),
                workspace_label_key: pick(
                    &self.schema.workspace_label_key,
                    defaults.workspace_label_key,
                ),
            },
        }
    }
}

/// Annotation and label keys the engine shares with the control-plane schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaKeys {
    #[serde(default = "default_display_name_annotation_key")]
    pub display_name_annotation_key: String,
    #[serde(default = "default_creator_annotation_key")]
    pub creator_annotation_key: String,
    #[serde(default = "default_workspace_label_key")]
    pub workspace_label_key: String,
}

impl Default for SchemaKeys {
    fn default() -> Self {
        Self {
            display_name_annotation_key: default_display_name_annotation_key(),
            creator_annotation_key: default_creator_annotation_key(),
            workspace_label_key: default_workspace_label_key(),
        }
    }
}

fn default_display_name_annotation_key() -> String {
    "kubesphere.io/alias-name".to_string()
}

fn default_creator_annotation_key() -> String {
    "kubesphere.io/creator".to_string()
}

fn default_workspace_label_key() -> String {
    "kubesphere.io/workspace".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
