//! Raw TOML configuration data types.
//!
//! These structs represent the exact structure of the config file. Each
//! section is an explicit schema of independently defaulted fields;
//! unknown keys are ignored rather than reinterpreted.

use foreman_domain::Mode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[catalog]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to a catalog document; the embedded default roster when unset.
    pub path: Option<PathBuf>,
}

/// `[state]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStateConfig {
    /// Directory holding per-session state documents.
    pub dir: PathBuf,
}

impl Default for FileStateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".foreman"),
        }
    }
}

/// `[routing]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoutingConfig {
    /// Default for the delivery-family preference when a command does not
    /// decide it explicitly.
    pub prefer_delivery: bool,
}

impl Default for FileRoutingConfig {
    fn default() -> Self {
        Self {
            prefer_delivery: true,
        }
    }
}

/// `[delivery]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeliveryConfig {
    /// Mode used by `start` when none is given on the command line.
    pub default_mode: Mode,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output.
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub catalog: FileCatalogConfig,
    pub state: FileStateConfig,
    pub routing: FileRoutingConfig,
    pub delivery: FileDeliveryConfig,
    pub output: FileOutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.state.dir, PathBuf::from(".foreman"));
        assert!(config.routing.prefer_delivery);
        assert_eq!(config.delivery.default_mode, Mode::Delivery);
        assert!(config.catalog.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_partial_file_fills_missing_sections() {
        let config: FileConfig = toml::from_str(
            r#"
            [delivery]
            default_mode = "quickfix"
            "#,
        )
        .unwrap();
        assert_eq!(config.delivery.default_mode, Mode::Quickfix);
        assert!(config.routing.prefer_delivery);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: FileConfig = toml::from_str(
            r#"
            [state]
            dir = "var/foreman"
            retention_days = 30

            [experimental]
            shiny = true
            "#,
        )
        .unwrap();
        assert_eq!(config.state.dir, PathBuf::from("var/foreman"));
    }
}
