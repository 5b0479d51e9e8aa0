use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MiningError, Result};
use crate::matcher::{MatcherConfig, ReleaseMatcher};
use crate::miner::ReleaseSorter;

/// Represents the complete configuration for release-mine.
///
/// Controls which reference names count as releases, how the mined set is
/// ordered, and whether classification repairs orphans.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MiningConfig {
    #[serde(default)]
    pub matcher: MatcherSection,

    #[serde(default)]
    pub sorting: SortingSection,

    #[serde(default)]
    pub classify: ClassifySection,
}

/// Matcher selection and its static inputs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatcherSection {
    /// "accept-all", "version-gated" or "stable-only"
    #[serde(default = "default_matcher_variant")]
    pub variant: String,

    /// Names never treated as releases
    #[serde(default)]
    pub exceptions: Vec<String>,

    /// Regex patterns for pre-release suffixes the stable-only matcher
    /// still accepts (e.g. "rc\\d+")
    #[serde(default)]
    pub allowed_suffixes: Vec<String>,
}

fn default_matcher_variant() -> String {
    "version-gated".to_string()
}

impl Default for MatcherSection {
    fn default() -> Self {
        MatcherSection {
            variant: default_matcher_variant(),
            exceptions: Vec::new(),
            allowed_suffixes: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SortingSection {
    /// "chronological" or "version"
    #[serde(default = "default_sort_order")]
    pub order: String,
}

fn default_sort_order() -> String {
    "chronological".to_string()
}

impl Default for SortingSection {
    fn default() -> Self {
        SortingSection {
            order: default_sort_order(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClassifySection {
    #[serde(default = "default_repair_orphans")]
    pub repair_orphans: bool,
}

fn default_repair_orphans() -> bool {
    true
}

impl Default for ClassifySection {
    fn default() -> Self {
        ClassifySection {
            repair_orphans: default_repair_orphans(),
        }
    }
}

impl MiningConfig {
    /// Resolve the matcher section into a ready matcher.
    pub fn matcher_config(&self) -> Result<MatcherConfig> {
        let matcher = match self.matcher.variant.as_str() {
            "accept-all" => ReleaseMatcher::AcceptAll,
            "version-gated" => ReleaseMatcher::VersionGated,
            "stable-only" => ReleaseMatcher::StableOnly,
            other => {
                return Err(MiningError::config(format!(
                    "Unknown matcher variant '{}' - expected accept-all, version-gated or stable-only",
                    other
                )))
            }
        };

        let mut allowed = Vec::new();
        for pattern in &self.matcher.allowed_suffixes {
            let re = Regex::new(pattern).map_err(|e| {
                MiningError::config(format!("Invalid suffix pattern '{}': {}", pattern, e))
            })?;
            allowed.push(re);
        }

        Ok(MatcherConfig {
            matcher,
            exceptions: self.matcher.exceptions.clone(),
            allowed_suffixes: allowed,
        })
    }

    pub fn sorter(&self) -> ReleaseSorter {
        match self.sorting.order.as_str() {
            "version" => ReleaseSorter::ByVersion,
            _ => ReleaseSorter::Chronological,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasemine.toml` in current directory
/// 3. `.releasemine.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<MiningConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasemine.toml").exists() {
        fs::read_to_string("./releasemine.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasemine.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(MiningConfig::default());
        }
    } else {
        return Ok(MiningConfig::default());
    };

    let config: MiningConfig =
        toml::from_str(&config_str).map_err(|e| MiningError::config(e.to_string()))?;
    Ok(config)
}
