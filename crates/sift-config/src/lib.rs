//! Configuration system for sift.
//!
//! sift uses TOML configuration files named `.sift.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.sift.toml` files found, then loading `~/.sift.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawMatchSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::config_template;

/// Top-level merged configuration for sift.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.sift.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How query terms are compared with text.
    pub matching: MatchSettings,
    /// Files the configuration was merged from, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sift.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.sift.toml` file.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            matching: self.matching,
        };
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// Settings controlling how query terms are compared with text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Compare without regard to letter case.
    pub ignore_case: bool,
    /// Strip diacritics before comparing.
    pub ignore_accents: bool,
    /// Require terms to sit on word boundaries.
    pub whole_words: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            ignore_case: true,
            ignore_accents: true,
            whole_words: true,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Matching settings.
    matching: MatchSettings,
}
