//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::path::PathBuf;

use crate::{
    Config, MatchSettings,
    parse::{RawConfig, RawMatchSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// CWD), lowest precedence last (global config). For each field the first defined value
/// wins; fields no file defines keep their defaults.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut matching = MatchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.matching {
            apply_raw_matching(&mut matching, raw);
        }
    }

    Config {
        matching,
        sources: configs.iter().map(|c| c.path.clone()).collect(),
    }
}

/// Applies raw matching settings to result, overwriting any present values.
fn apply_raw_matching(result: &mut MatchSettings, raw: &RawMatchSettings) {
    if let Some(v) = raw.ignore_case {
        result.ignore_case = v;
    }
    if let Some(v) = raw.ignore_accents {
        result.ignore_accents = v;
    }
    if let Some(v) = raw.whole_words {
        result.whole_words = v;
    }
}
