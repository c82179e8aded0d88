//! Configuration file support for dropsel.
//!
//! The demo form's fields are loaded from `~/.config/dropsel/config.toml`
//! with the following precedence:
//! 1. CLI `--config <path>` (highest priority, errors are fatal)
//! 2. `DROPSEL_CONFIG` environment variable
//! 3. Default config file path
//! 4. Built-in demo fields (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/dropsel/config.toml
//! [[fields]]
//! name = "Fruit"
//! multiple = false
//! options = [
//!     { label = "Apple", value = 1 },
//!     { label = "Banana", value = 2 },
//! ]
//!
//! [[fields]]
//! name = "Toppings"
//! multiple = true
//! options = [
//!     { label = "Sprinkles", value = 1 },
//!     { label = "Fudge", value = 2 },
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DropselError, Result};
use crate::select::SelectOption;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fields shown in the demo form, in order.
    pub fields: Vec<FieldConfig>,
}

/// One dropdown field in the form.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    /// Label shown next to the dropdown.
    pub name: String,

    /// Multiple-choice mode. Fixed for the lifetime of the field.
    #[serde(default)]
    pub multiple: bool,

    /// Options in navigation order. May be empty.
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl Default for Config {
    fn default() -> Self {
        let fruit = vec![
            SelectOption::new("Apple", 1),
            SelectOption::new("Banana", 2),
            SelectOption::new("Cherry", 3),
            SelectOption::new("Date", 4),
            SelectOption::new("Elderberry", 5),
        ];

        Self {
            fields: vec![
                FieldConfig {
                    name: "Fruit".to_string(),
                    multiple: false,
                    options: fruit.clone(),
                },
                FieldConfig {
                    name: "Basket".to_string(),
                    multiple: true,
                    options: fruit,
                },
            ],
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns the built-in demo fields if the file doesn't exist or can't
    /// be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path. Unlike [`Config::load`],
    /// a missing or malformed file is an error here.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DropselError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| DropselError::ConfigParse(e.to_string()))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("DROPSEL_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dropsel")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fields.len(), 2);
        assert!(!config.fields[0].multiple);
        assert!(config.fields[1].multiple);
        assert_eq!(config.fields[0].options.len(), 5);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [[fields]]
            name = "Fruit"
            options = [
                { label = "Apple", value = 1 },
                { label = "Banana", value = 2 },
            ]

            [[fields]]
            name = "Toppings"
            multiple = true
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields[0].name, "Fruit");
        assert!(!config.fields[0].multiple);
        assert_eq!(config.fields[0].options[1], SelectOption::new("Banana", 2));
        assert!(config.fields[1].multiple);
        assert!(config.fields[1].options.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Config::from_path(Path::new("/nonexistent/dropsel.toml")).unwrap_err();
        assert!(matches!(err, DropselError::ConfigNotFound(_)));
    }
}
