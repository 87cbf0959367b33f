//! mdhtml Config
//!
//! This crate handles configuration loading and management
//! for mdhtml, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdhtml/config.toml`
//! - macOS: `~/Library/Application Support/mdhtml/config.toml`
//! - Windows: `%APPDATA%\mdhtml\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdhtml_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an inline override
//! let config = Config::load_with_override(Some("[output]\nNoDoc = true")).unwrap();
//! assert!(config.options().suppress_document_wrapper);
//! ```

mod document;
mod output;

pub use document::DocumentConfig;
pub use output::OutputConfig;

use mdhtml_core::{MdhtmlError, Options, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
Trace = false
NoDoc = false

[document]
Lang  = "en"
Title = ""
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output mode configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Document wrapper configuration
    #[serde(default)]
    pub document: DocumentConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// assert!(toml.contains("[document]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdhtml")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| MdhtmlError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Like [`Config::ensure_config_file`], rooted at `config_dir`.
    ///
    /// An existing file is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MdhtmlError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_config::Config;
    /// let config = Config::parse("[document]\nLang = \"de\"").unwrap();
    /// assert_eq!(config.document.lang, "de");
    /// assert!(!config.output.trace);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MdhtmlError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it;
    ///    otherwise parse it as inline TOML and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let other = if override_path.exists() {
                Self::load_from(override_path)?
            } else {
                toml::from_str(override_str)
                    .map_err(|e| MdhtmlError::Config(format!("Override parse error: {}", e)))?
            };

            config.merge(&other);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// # Example
    ///
    /// ```
    /// use mdhtml_config::Config;
    ///
    /// let mut base = Config::default();
    /// let other = Config::parse("[output]\nTrace = true").unwrap();
    ///
    /// base.merge(&other);
    /// assert!(base.output.trace);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.output.merge(&other.output);
        self.document.merge(&other.document);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MdhtmlError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Translator options selected by this config.
    pub fn options(&self) -> Options {
        self.output.options()
    }
}
