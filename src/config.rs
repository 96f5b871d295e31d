//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a markbrief.toml, and if present we load settings from there.
//! This provides the default summary ratio and output format; command line flags win over both.

use crate::briefer::DEFAULT_SUMMARY_RATIO;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "markbrief.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from markbrief.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_SUMMARY_RATIO)]
    /// Fraction of each section's text to keep.
    pub summary_ratio: f64,
    #[facet(default = "markdown".to_string())]
    /// Output format name, `markdown` or `html`.
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_ratio: DEFAULT_SUMMARY_RATIO,
            format: "markdown".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from markbrief.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, keeping defaults for anything missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
